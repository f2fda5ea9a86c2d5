//!
//! All roles used within application
//!

use strum::AsRefStr;

#[derive(AsRefStr)]
pub enum Role {
    /// Grants every floating ticket operation
    #[strum(serialize = "travel_agency_floating_tickets")]
    ManageFloatingTickets,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn manage_floating_tickets() {
        let role = Role::ManageFloatingTickets.as_ref();
        assert_eq!(role, "travel_agency_floating_tickets");
    }
}
