// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use num_traits::Float;

use crate::{AngleBatch, Bunge};

/// **Requires crate feature `"serde"`**
///
/// Serialized as the sequence `[phi1, cap_phi, phi2]`.
impl<A> Serialize for Bunge<A>
where A: Serialize
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        let mut state = serializer.serialize_tuple(3)?;
        state.serialize_element(&self.phi1)?;
        state.serialize_element(&self.cap_phi)?;
        state.serialize_element(&self.phi2)?;
        state.end()
    }
}

/// **Requires crate feature `"serde"`**
impl<'de, A> Deserialize<'de> for Bunge<A>
where A: Deserialize<'de> + Copy
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        <[A; 3]>::deserialize(deserializer).map(Bunge::from)
    }
}

/// **Requires crate feature `"serde"`**
///
/// Serialized as a sequence of angle triples, in batch order.
impl<A> Serialize for AngleBatch<A>
where A: Float + Serialize
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        serializer.collect_seq(self.iter())
    }
}

/// **Requires crate feature `"serde"`**
///
/// An empty sequence is rejected.
impl<'de, A> Deserialize<'de> for AngleBatch<A>
where A: Float + Deserialize<'de>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        let triples = Vec::<Bunge<A>>::deserialize(deserializer)?;
        AngleBatch::from_triples(&triples).map_err(de::Error::custom)
    }
}
