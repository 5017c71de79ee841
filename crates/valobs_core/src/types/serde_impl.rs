//! Serde support.
//!
//! Scalar value types travel as their canonical string. Coordinates travel
//! as JSON numbers, and composite geographic values as structs; both are
//! validated again on the way in.

use super::{
    Address, Altitude, Country, CountryCode, Date, DateTime, Duration, Email, GeoLocation,
    Latitude, Longitude, Money, Time,
};
use serde::ser::SerializeStruct;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

macro_rules! canonical_string_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let s = String::deserialize(deserializer)?;
                    <$ty>::parse(&s).map_err(de::Error::custom)
                }
            }
        )*
    };
}

canonical_string_serde!(Date, Time, DateTime, Duration, Money, CountryCode, Email);

macro_rules! coordinate_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.serialize_f64(self.value())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let value = f64::deserialize(deserializer)?;
                    <$ty>::new(value).map_err(de::Error::custom)
                }
            }
        )*
    };
}

coordinate_serde!(Latitude, Longitude, Altitude);

impl Serialize for GeoLocation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("GeoLocation", 3)?;
        state.serialize_field("latitude", &self.latitude())?;
        state.serialize_field("longitude", &self.longitude())?;
        state.serialize_field("altitude", &self.altitude())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for GeoLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct GeoLocationHelper {
            latitude: f64,
            longitude: f64,
            #[serde(default)]
            altitude: f64,
        }

        let helper = GeoLocationHelper::deserialize(deserializer)?;
        GeoLocation::new(helper.latitude, helper.longitude, helper.altitude)
            .map_err(de::Error::custom)
    }
}

impl Serialize for Country {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Country", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("name", self.name())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CountryHelper {
            code: String,
            name: String,
        }

        let helper = CountryHelper::deserialize(deserializer)?;
        Country::new(&helper.code, &helper.name).map_err(de::Error::custom)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Address", 5)?;
        state.serialize_field("street", self.street())?;
        state.serialize_field("city", self.city())?;
        state.serialize_field("state", &self.state())?;
        state.serialize_field("postal_code", self.postal_code())?;
        state.serialize_field("country", self.country())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct AddressHelper {
            street: String,
            city: String,
            state: Option<String>,
            postal_code: String,
            country: Country,
        }

        let helper = AddressHelper::deserialize(deserializer)?;
        Address::new(
            &helper.street,
            &helper.city,
            helper.state.as_deref(),
            &helper.postal_code,
            helper.country,
        )
        .map_err(de::Error::custom)
    }
}
