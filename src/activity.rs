use crate::error::{QueryError, ShapeError};
use std::str::FromStr;

/// One suggested "thing to do", as returned by the activity API.
///
/// When a query matches nothing the API answers with only an `error` field; every other field is
/// then left at its default.  Otherwise all fields are required.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(try_from = "RawActivity")]
pub struct Activity {
    pub description: String,
    pub category: String,
    pub participant_count: u32,
    pub relative_price: f32,
    pub key: String,
    pub error: Option<String>,
}

/// The API's JSON before deciding which of its two shapes it is.
#[derive(serde::Deserialize)]
struct RawActivity {
    activity: Option<String>,
    #[serde(rename = "type")]
    category: Option<String>,
    participants: Option<u32>,
    price: Option<f32>,
    key: Option<String>,
    error: Option<String>,
}

impl TryFrom<RawActivity> for Activity {
    type Error = ShapeError;

    fn try_from(raw: RawActivity) -> Result<Self, Self::Error> {
        if let Some(error) = raw.error.filter(|e| !e.is_empty()) {
            return Ok(Activity {
                error: Some(error),
                ..Default::default()
            });
        }

        let participant_count = raw.participants.ok_or(ShapeError::Missing("participants"))?;
        if participant_count == 0 {
            return Err(ShapeError::NoParticipants);
        }
        let key = raw.key.ok_or(ShapeError::Missing("key"))?;
        if key.is_empty() {
            return Err(ShapeError::EmptyKey);
        }

        Ok(Activity {
            description: raw.activity.ok_or(ShapeError::Missing("activity"))?,
            category: raw.category.ok_or(ShapeError::Missing("type"))?,
            participant_count,
            relative_price: raw.price.ok_or(ShapeError::Missing("price"))?,
            key,
            error: None,
        })
    }
}

impl Activity {
    /// The API understood the request but no activity matches its filters.
    pub fn no_match(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// Relative price as shown to users, always with two decimals.
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.relative_price)
    }
}

/// Activity types accepted by the API's `type` filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Education,
        Category::Recreational,
        Category::Social,
        Category::Diy,
        Category::Charity,
        Category::Cooking,
        Category::Relaxation,
        Category::Music,
        Category::Busywork,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Recreational => "recreational",
            Category::Social => "social",
            Category::Diy => "diy",
            Category::Charity => "charity",
            Category::Cooking => "cooking",
            Category::Relaxation => "relaxation",
            Category::Music => "music",
            Category::Busywork => "busywork",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Option names double as the API's query parameter names.
pub const OPTION_CATEGORY: &str = "type";
pub const OPTION_PRICE: &str = "price";
pub const OPTION_PARTICIPANTS: &str = "participants";

/// Optional filters for an activity request.  All fields empty means "anything".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityQuery {
    pub category: Option<Category>,
    pub relative_price: Option<f32>,
    pub participant_count: Option<u32>,
}

impl ActivityQuery {
    /// Build a query from `(name, value)` command options.  Unknown option names are ignored.
    pub fn from_options<'a, I>(options: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self::default();
        for (name, value) in options {
            let invalid = || QueryError::InvalidOption {
                name: name.to_owned(),
                value: value.to_owned(),
            };
            match name {
                OPTION_CATEGORY => query.category = Some(value.parse().map_err(|_| invalid())?),
                OPTION_PRICE => {
                    let price: f32 = value.parse().map_err(|_| invalid())?;
                    if !(0.0..=1.0).contains(&price) {
                        return Err(invalid());
                    }
                    query.relative_price = Some(price);
                }
                OPTION_PARTICIPANTS => {
                    let count: u32 = value.parse().map_err(|_| invalid())?;
                    if count == 0 {
                        return Err(invalid());
                    }
                    query.participant_count = Some(count);
                }
                _ => {}
            }
        }
        Ok(query)
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.relative_price.is_none() && self.participant_count.is_none()
    }

    /// `field=value` pairs joined by `&`, in field declaration order.
    ///
    /// Values come from closed choice lists and need no escaping.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(format!("{}={}", OPTION_CATEGORY, category));
        }
        if let Some(price) = self.relative_price {
            pairs.push(format!("{}={}", OPTION_PRICE, price));
        }
        if let Some(count) = self.participant_count {
            pairs.push(format!("{}={}", OPTION_PARTICIPANTS, count));
        }
        pairs.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_activity() {
        let body = r#"{"activity":"Learn how to make a website","type":"education",
            "participants":1,"price":0.1,"link":"","key":"8264223","accessibility":0.1}"#;
        let activity: Activity = serde_json::from_str(body).unwrap();

        assert_eq!(activity.description, "Learn how to make a website");
        assert_eq!(activity.category, "education");
        assert_eq!(activity.participant_count, 1);
        assert_eq!(activity.key, "8264223");
        assert!(!activity.no_match());
    }

    #[test]
    fn decodes_no_match_response() {
        let body = r#"{"error":"No activity found with the specified parameters"}"#;
        let activity: Activity = serde_json::from_str(body).unwrap();

        assert!(activity.no_match());
        assert!(activity.description.is_empty());
    }

    #[test]
    fn empty_error_is_not_a_no_match() {
        let activity = Activity {
            error: Some(String::new()),
            ..Default::default()
        };
        assert!(!activity.no_match());

        // An empty `error` alongside a full activity is still an activity.
        let body = r#"{"activity":"Bake bread","type":"cooking","participants":1,"price":0.2,
            "key":"5","error":""}"#;
        let activity: Activity = serde_json::from_str(body).unwrap();
        assert_eq!(activity.description, "Bake bread");
        assert!(!activity.no_match());
    }

    #[test]
    fn rejects_json_that_is_not_an_activity() {
        for body in [
            "{}",
            "[]",
            r#"{"message":"Not Found"}"#,
            r#"{"activity":"x"}"#,
            r#"{"error":""}"#,
        ] {
            assert!(
                serde_json::from_str::<Activity>(body).is_err(),
                "{} decoded as an activity",
                body
            );
        }
    }

    #[test]
    fn rejects_activity_without_participants_or_key() {
        let no_one = r#"{"activity":"Nap","type":"relaxation","participants":0,"price":0,
            "key":"7"}"#;
        assert!(serde_json::from_str::<Activity>(no_one).is_err());

        let no_key = r#"{"activity":"Nap","type":"relaxation","participants":1,"price":0,
            "key":""}"#;
        assert!(serde_json::from_str::<Activity>(no_key).is_err());
    }

    #[test]
    fn price_label_has_two_decimals() {
        let label = |relative_price: f32| {
            Activity {
                relative_price,
                ..Default::default()
            }
            .price_label()
        };
        assert_eq!(label(0.3), "0.30");
        assert_eq!(label(0.0), "0.00");
        assert_eq!(label(1.0), "1.00");
        assert_eq!(label(0.15), "0.15");
    }

    #[test]
    fn query_string_follows_field_order() {
        let query = ActivityQuery {
            category: Some(Category::Cooking),
            relative_price: Some(0.0),
            participant_count: None,
        };
        assert_eq!(query.to_query_string(), "type=cooking&price=0");

        let query = ActivityQuery {
            category: Some(Category::Music),
            relative_price: Some(0.3),
            participant_count: Some(2),
        };
        assert_eq!(query.to_query_string(), "type=music&price=0.3&participants=2");
    }

    #[test]
    fn empty_query_has_no_pairs() {
        let query = ActivityQuery::default();
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn query_from_options_ignores_option_order() {
        let query =
            ActivityQuery::from_options([("participants", "4"), ("type", "diy")]).unwrap();
        assert_eq!(query.category, Some(Category::Diy));
        assert_eq!(query.participant_count, Some(4));
        assert_eq!(query.relative_price, None);
        assert_eq!(query.to_query_string(), "type=diy&participants=4");
    }

    #[test]
    fn query_from_options_rejects_bad_values() {
        assert!(ActivityQuery::from_options([("type", "napping")]).is_err());
        assert!(ActivityQuery::from_options([("price", "cheap")]).is_err());
        assert!(ActivityQuery::from_options([("price", "2")]).is_err());
        assert!(ActivityQuery::from_options([("participants", "0")]).is_err());
    }

    #[test]
    fn category_round_trips_through_its_token() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }
}
