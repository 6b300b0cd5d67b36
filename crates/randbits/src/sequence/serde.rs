use crate::BitSequence;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for BitSequence {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BitSequence {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BitStringVisitor;

        impl serde::de::Visitor<'_> for BitStringVisitor {
            type Value = BitSequence;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a string of exactly 128 '0'/'1' characters")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(BitStringVisitor)
    }
}
