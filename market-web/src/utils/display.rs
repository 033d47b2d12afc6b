//! Display derivations shared by every view: role badges and status colours.
//!
//! Classes map onto the stylesheet's `badge-*` and `status-*` rules.

use shared::dto::{AppointmentStatus, MembershipStatus, OrderStatus, TransactionStatus};
use shared::role::Role;

/// Label and CSS class of a role badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

pub fn role_badge(role: Role) -> Badge {
    let class = match role {
        Role::Farmer => "badge badge-farmer",
        Role::Buyer => "badge badge-buyer",
        Role::CooperativeOwner => "badge badge-coop",
        Role::Organization => "badge badge-org",
    };
    Badge {
        label: role.label(),
        class,
    }
}

/// Colour family of a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Warning,
    Success,
    Danger,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Neutral => "status status-neutral",
            Tone::Info => "status status-info",
            Tone::Warning => "status status-warning",
            Tone::Success => "status status-success",
            Tone::Danger => "status status-danger",
        }
    }
}

pub fn order_tone(status: OrderStatus) -> Tone {
    match status {
        OrderStatus::Pending => Tone::Warning,
        OrderStatus::Confirmed | OrderStatus::Shipped => Tone::Info,
        OrderStatus::Delivered => Tone::Success,
        OrderStatus::Cancelled => Tone::Danger,
        OrderStatus::Unknown => Tone::Neutral,
    }
}

pub fn transaction_tone(status: TransactionStatus) -> Tone {
    match status {
        TransactionStatus::Pending => Tone::Warning,
        TransactionStatus::Completed => Tone::Success,
        TransactionStatus::Failed => Tone::Danger,
        TransactionStatus::Unknown => Tone::Neutral,
    }
}

pub fn membership_tone(status: MembershipStatus) -> Tone {
    match status {
        MembershipStatus::Pending => Tone::Warning,
        MembershipStatus::Active => Tone::Success,
        MembershipStatus::Suspended => Tone::Danger,
        MembershipStatus::Unknown => Tone::Neutral,
    }
}

pub fn appointment_tone(status: AppointmentStatus) -> Tone {
    match status {
        AppointmentStatus::Scheduled => Tone::Info,
        AppointmentStatus::Completed => Tone::Success,
        AppointmentStatus::Cancelled => Tone::Danger,
        AppointmentStatus::Unknown => Tone::Neutral,
    }
}

pub fn appointment_label(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "Scheduled",
        AppointmentStatus::Completed => "Completed",
        AppointmentStatus::Cancelled => "Cancelled",
        AppointmentStatus::Unknown => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_badges_are_distinct() {
        let mut classes: Vec<_> = Role::ALL.iter().map(|r| role_badge(*r).class).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), Role::ALL.len());
        assert_eq!(role_badge(Role::CooperativeOwner).label, "Cooperative Owner");
    }

    #[test]
    fn test_order_tones() {
        assert_eq!(order_tone(OrderStatus::Pending), Tone::Warning);
        assert_eq!(order_tone(OrderStatus::Delivered), Tone::Success);
        assert_eq!(order_tone(OrderStatus::Cancelled), Tone::Danger);
        assert_eq!(order_tone(OrderStatus::Unknown).class(), "status status-neutral");
    }

    #[test]
    fn test_failure_states_are_danger() {
        assert_eq!(transaction_tone(TransactionStatus::Failed), Tone::Danger);
        assert_eq!(membership_tone(MembershipStatus::Suspended), Tone::Danger);
        assert_eq!(appointment_tone(AppointmentStatus::Cancelled), Tone::Danger);
    }
}
