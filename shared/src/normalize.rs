//! # Record Normalization
//!
//! The backend returns users and crops in several shapes. Views never read the
//! raw records directly; they call the functions here and render the typed
//! result. Each field resolves by a fixed precedence, first non-blank wins:
//!
//! | Output field            | Precedence                                                        |
//! |-------------------------|-------------------------------------------------------------------|
//! | `UserProfile.display_name` | `full_name`, `first_name last_name`, `username`, email local part, `"Unknown user"` |
//! | `UserProfile.role`      | `role`, `user_type`, `account_type` (first that parses), [`Role::Buyer`] |
//! | `UserProfile.location`  | `location`, `county`, `region`, `"Location not set"`              |
//! | `Crop.name`             | `crop_name`, `name`, `title`, `"Unnamed crop"`                    |
//! | `Crop.farmer_name`      | nested `farmer` name, `farmer_name`, `"Unknown farmer"`           |
//! | `Crop.quantity`         | `quantity`, `quantity_available`, `0`                             |
//! | `Crop.unit`             | `unit`, `"kg"`                                                    |
//! | `Crop.price_per_unit`   | `price_per_unit`, `price`, `0`                                    |
//!
//! [`membership_count`] follows the same idea for cooperatives: the server
//! count, else the embedded member list, else a stable placeholder.

use crate::dto::{Cooperative, CropRecord, Id, UserRecord};
use crate::role::Role;

pub const UNKNOWN_USER: &str = "Unknown user";
pub const UNKNOWN_FARMER: &str = "Unknown farmer";
pub const UNNAMED_CROP: &str = "Unnamed crop";
pub const LOCATION_NOT_SET: &str = "Location not set";
pub const DEFAULT_UNIT: &str = "kg";

/// Placeholder member counts fall in this range.
pub const PLACEHOLDER_MEMBERS: std::ops::RangeInclusive<u32> = 12..=60;

/// A user ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Id,
    pub display_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Role,
    pub location: String,
    pub bio: Option<String>,
    pub cooperative_id: Option<Id>,
}

/// A crop listing ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Crop {
    pub id: Id,
    pub name: String,
    pub farmer_name: String,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: f64,
    pub location: Option<String>,
    pub harvest_date: Option<String>,
    pub description: Option<String>,
}

impl Crop {
    /// Value of the whole listing at the asking price.
    pub fn listing_value(&self) -> f64 {
        self.quantity * self.price_per_unit
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// The best available name for a user record, if it carries one at all.
pub fn resolve_name(record: &UserRecord) -> Option<String> {
    if let Some(full) = present(&record.full_name) {
        return Some(full.to_string());
    }

    match (present(&record.first_name), present(&record.last_name)) {
        (Some(first), Some(last)) => return Some(format!("{first} {last}")),
        (Some(only), None) | (None, Some(only)) => return Some(only.to_string()),
        (None, None) => {}
    }

    if let Some(username) = present(&record.username) {
        return Some(username.to_string());
    }

    present(&record.email)
        .and_then(|email| email.split('@').next())
        .filter(|local| !local.is_empty())
        .map(str::to_string)
}

/// The first role field that parses, in precedence order.
pub fn resolve_role(record: &UserRecord) -> Option<Role> {
    [&record.role, &record.user_type, &record.account_type]
        .into_iter()
        .filter_map(present)
        .find_map(Role::parse)
}

/// Normalize a raw user record.
///
/// ```rust
/// use shared::dto::UserRecord;
/// use shared::normalize::normalize_user;
/// use shared::role::Role;
///
/// let record = UserRecord {
///     username: Some("kipchoge".into()),
///     account_type: Some("coop_owner".into()),
///     county: Some("Nandi".into()),
///     ..Default::default()
/// };
/// let profile = normalize_user(&record);
/// assert_eq!(profile.display_name, "kipchoge");
/// assert_eq!(profile.role, Role::CooperativeOwner);
/// assert_eq!(profile.location, "Nandi");
/// ```
pub fn normalize_user(record: &UserRecord) -> UserProfile {
    let location = [&record.location, &record.county, &record.region]
        .into_iter()
        .find_map(present)
        .unwrap_or(LOCATION_NOT_SET)
        .to_string();

    UserProfile {
        id: record.id.clone(),
        display_name: resolve_name(record).unwrap_or_else(|| UNKNOWN_USER.to_string()),
        email: present(&record.email).map(str::to_string),
        phone: present(&record.phone).map(str::to_string),
        role: resolve_role(record).unwrap_or(Role::Buyer),
        location,
        bio: present(&record.bio).map(str::to_string),
        cooperative_id: record.cooperative_id.clone(),
    }
}

/// Normalize a raw crop listing.
pub fn normalize_crop(record: &CropRecord) -> Crop {
    let name = [&record.crop_name, &record.name, &record.title]
        .into_iter()
        .find_map(present)
        .unwrap_or(UNNAMED_CROP)
        .to_string();

    let farmer_name = record
        .farmer
        .as_ref()
        .and_then(resolve_name)
        .or_else(|| present(&record.farmer_name).map(str::to_string))
        .unwrap_or_else(|| UNKNOWN_FARMER.to_string());

    let non_negative = |v: f64| (v.is_finite() && v >= 0.0).then_some(v);

    Crop {
        id: record.id.clone(),
        name,
        farmer_name,
        quantity: record
            .quantity
            .and_then(non_negative)
            .or(record.quantity_available.and_then(non_negative))
            .unwrap_or(0.0),
        unit: present(&record.unit).unwrap_or(DEFAULT_UNIT).to_string(),
        price_per_unit: record
            .price_per_unit
            .and_then(non_negative)
            .or(record.price.and_then(non_negative))
            .unwrap_or(0.0),
        location: present(&record.location).map(str::to_string),
        harvest_date: present(&record.harvest_date).map(str::to_string),
        description: present(&record.description).map(str::to_string),
    }
}

/// Number of members to show for a cooperative.
///
/// Uses the server's count, then the embedded member list. When neither is
/// available the count is derived from the cooperative id, so the same
/// cooperative always shows the same number.
pub fn membership_count(coop: &Cooperative) -> u32 {
    if let Some(count) = coop.member_count {
        return count;
    }
    if let Some(members) = &coop.members {
        return members.len() as u32;
    }
    placeholder_members(&coop.id)
}

fn placeholder_members(id: &Id) -> u32 {
    // FNV-1a, 32 bit
    let hash = id
        .as_str()
        .bytes()
        .fold(0x811c_9dc5_u32, |h, b| (h ^ b as u32).wrapping_mul(0x0100_0193));
    let span = PLACEHOLDER_MEMBERS.end() - PLACEHOLDER_MEMBERS.start() + 1;
    PLACEHOLDER_MEMBERS.start() + hash % span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{Member, MembershipStatus};
    use proptest::prelude::*;

    fn user() -> UserRecord {
        UserRecord {
            id: Id::from(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_display_name_precedence() {
        let mut record = user();
        record.email = Some("mumbua@farm.co.ke".into());
        assert_eq!(normalize_user(&record).display_name, "mumbua");

        record.username = Some("mumbua_k".into());
        assert_eq!(normalize_user(&record).display_name, "mumbua_k");

        record.last_name = Some("Kioko".into());
        assert_eq!(normalize_user(&record).display_name, "Kioko");

        record.first_name = Some("Mumbua".into());
        assert_eq!(normalize_user(&record).display_name, "Mumbua Kioko");

        record.full_name = Some("Mumbua N. Kioko".into());
        assert_eq!(normalize_user(&record).display_name, "Mumbua N. Kioko");
    }

    #[test]
    fn test_blank_fields_count_as_absent() {
        let mut record = user();
        record.full_name = Some("   ".into());
        record.username = Some("".into());
        assert_eq!(normalize_user(&record).display_name, UNKNOWN_USER);
        assert_eq!(normalize_user(&record).location, LOCATION_NOT_SET);
    }

    #[test]
    fn test_role_precedence_skips_unparseable() {
        let mut record = user();
        assert_eq!(normalize_user(&record).role, Role::Buyer);

        record.account_type = Some("organization".into());
        assert_eq!(normalize_user(&record).role, Role::Organization);

        record.user_type = Some("farmer".into());
        assert_eq!(normalize_user(&record).role, Role::Farmer);

        record.role = Some("superadmin".into());
        assert_eq!(normalize_user(&record).role, Role::Farmer);

        record.role = Some("coop_owner".into());
        assert_eq!(normalize_user(&record).role, Role::CooperativeOwner);
    }

    #[test]
    fn test_crop_fallbacks() {
        let record = CropRecord {
            id: Id::from(4),
            title: Some("Avocado (Hass)".into()),
            farmer_name: Some("Jane Wambui".into()),
            quantity_available: Some(300.0),
            price: Some(18.0),
            ..Default::default()
        };
        let crop = normalize_crop(&record);
        assert_eq!(crop.name, "Avocado (Hass)");
        assert_eq!(crop.farmer_name, "Jane Wambui");
        assert_eq!(crop.quantity, 300.0);
        assert_eq!(crop.unit, DEFAULT_UNIT);
        assert_eq!(crop.price_per_unit, 18.0);
        assert_eq!(crop.listing_value(), 5400.0);
    }

    #[test]
    fn test_nested_farmer_beats_flat_name() {
        let record = CropRecord {
            id: Id::from(5),
            crop_name: Some("Tea".into()),
            farmer: Some(UserRecord {
                first_name: Some("Peter".into()),
                last_name: Some("Mwangi".into()),
                ..user()
            }),
            farmer_name: Some("stale name".into()),
            ..Default::default()
        };
        assert_eq!(normalize_crop(&record).farmer_name, "Peter Mwangi");

        let nameless_farmer = CropRecord {
            farmer: Some(user()),
            ..record.clone()
        };
        assert_eq!(normalize_crop(&nameless_farmer).farmer_name, "stale name");

        let nothing = CropRecord::default();
        let crop = normalize_crop(&nothing);
        assert_eq!(crop.name, UNNAMED_CROP);
        assert_eq!(crop.farmer_name, UNKNOWN_FARMER);
    }

    #[test]
    fn test_negative_quantity_falls_through() {
        let record = CropRecord {
            quantity: Some(-3.0),
            quantity_available: Some(7.0),
            ..Default::default()
        };
        assert_eq!(normalize_crop(&record).quantity, 7.0);
    }

    #[test]
    fn test_membership_count_precedence() {
        let member = Member {
            id: Id::from(1),
            user_id: None,
            full_name: None,
            email: None,
            phone: None,
            status: MembershipStatus::Active,
            joined_at: None,
        };
        let mut coop = Cooperative {
            id: Id::from(77),
            name: "Meru Growers".into(),
            members: Some(vec![member.clone(), member]),
            ..Default::default()
        };
        assert_eq!(membership_count(&coop), 2);

        coop.member_count = Some(140);
        assert_eq!(membership_count(&coop), 140);
    }

    proptest! {
        #[test]
        fn placeholder_is_stable_and_in_range(id in "[a-zA-Z0-9-]{0,24}") {
            let coop = Cooperative { id: Id(id), ..Default::default() };
            let first = membership_count(&coop);
            prop_assert_eq!(first, membership_count(&coop));
            prop_assert!(PLACEHOLDER_MEMBERS.contains(&first));
        }
    }
}
