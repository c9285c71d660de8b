// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Bunge Euler-angle triple.
use num_traits::Float;

/// One Bunge Euler-angle rotation (φ1, Φ, φ2), in radians.
///
/// The three angles describe the intrinsic rotation sequence Z, X, Z:
/// `phi1` about the sample Z axis, `cap_phi` about the rotated X axis and
/// `phi2` about the rotated Z axis. No range restriction is applied; angles
/// outside `[0, 2π)` are used as given.
///
/// ```
/// use ndarray_bunge::Bunge;
///
/// let a = Bunge::from_degrees(90., 0., 0.);
/// assert!((a.phi1 - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bunge<A>
{
    /// First rotation, about Z.
    pub phi1: A,
    /// Second rotation, about the rotated X axis.
    pub cap_phi: A,
    /// Third rotation, about the rotated Z axis.
    pub phi2: A,
}

impl<A> Bunge<A>
where A: Float
{
    /// Create a new angle triple from angles in radians.
    #[inline]
    pub fn new(phi1: A, cap_phi: A, phi2: A) -> Self
    {
        Bunge { phi1, cap_phi, phi2 }
    }

    /// Create a new angle triple from angles in degrees.
    pub fn from_degrees(phi1: A, cap_phi: A, phi2: A) -> Self
    {
        Bunge::new(phi1.to_radians(), cap_phi.to_radians(), phi2.to_radians())
    }

    /// The triple (0, 0, 0), which maps to the identity rotation.
    #[inline]
    pub fn identity() -> Self
    {
        Bunge::new(A::zero(), A::zero(), A::zero())
    }

    /// Return the angles in degrees as `[phi1, cap_phi, phi2]`.
    pub fn to_degrees(self) -> [A; 3]
    {
        [self.phi1.to_degrees(), self.cap_phi.to_degrees(), self.phi2.to_degrees()]
    }

    /// Return `(sin, cos)` of each angle, in the order φ1, Φ, φ2.
    #[inline]
    pub fn sin_cos(self) -> [(A, A); 3]
    {
        [self.phi1.sin_cos(), self.cap_phi.sin_cos(), self.phi2.sin_cos()]
    }

    /// Return `true` if all three angles are finite.
    pub fn is_finite(self) -> bool
    {
        self.phi1.is_finite() && self.cap_phi.is_finite() && self.phi2.is_finite()
    }
}

impl<A: Copy> From<[A; 3]> for Bunge<A>
{
    fn from(a: [A; 3]) -> Self
    {
        Bunge {
            phi1: a[0],
            cap_phi: a[1],
            phi2: a[2],
        }
    }
}

impl<A: Copy> From<(A, A, A)> for Bunge<A>
{
    fn from((phi1, cap_phi, phi2): (A, A, A)) -> Self
    {
        Bunge { phi1, cap_phi, phi2 }
    }
}

impl<A> From<Bunge<A>> for [A; 3]
{
    fn from(b: Bunge<A>) -> Self
    {
        [b.phi1, b.cap_phi, b.phi2]
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn degrees_round_trip()
    {
        let a = Bunge::from_degrees(30., 45., 180.);
        assert!((a.phi2 - PI).abs() < 1e-15);
        let d = a.to_degrees();
        assert!((d[0] - 30.).abs() < 1e-12);
        assert!((d[1] - 45.).abs() < 1e-12);
    }

    #[test]
    fn sin_cos_order()
    {
        let a = Bunge::new(0., PI / 2., PI);
        let [(s1, c1), (s2, _), (_, c3)] = a.sin_cos();
        assert_eq!(s1, 0.);
        assert_eq!(c1, 1.);
        assert!((s2 - 1.).abs() < 1e-15);
        assert!((c3 + 1.).abs() < 1e-15);
    }

    #[test]
    fn finiteness()
    {
        assert!(Bunge::<f32>::identity().is_finite());
        assert!(!Bunge::new(f64::NAN, 0., 0.).is_finite());
        assert!(!Bunge::new(0., 0., f64::INFINITY).is_finite());
    }

    #[test]
    fn conversions()
    {
        let a: Bunge<f64> = [1., 2., 3.].into();
        let b: Bunge<f64> = (1., 2., 3.).into();
        assert_eq!(a, b);
        assert_eq!(<[f64; 3]>::from(a), [1., 2., 3.]);
    }
}
