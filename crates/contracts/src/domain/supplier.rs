use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A leaf supplier (estate or smallholder cooperative).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub region: String,
    pub active: bool,
}

/// Payload for `POST /api/staff/suppliers` and `PUT /api/staff/suppliers/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierInput {
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub region: String,
    pub active: bool,
}

impl SupplierInput {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Supplier name is required".into());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".into());
        }
        let email = self.email.trim();
        let at = match email.find('@') {
            Some(pos) if pos > 0 => pos,
            _ => return Err("Email address is not valid".into()),
        };
        if !email[at + 1..].contains('.') || email.ends_with('.') {
            return Err("Email address is not valid".into());
        }
        let digits = self.phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < 7 {
            return Err("Phone number must contain at least 7 digits".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> SupplierInput {
        SupplierInput {
            name: "Nilgiri Estates".into(),
            contact_name: "A. Pillai".into(),
            email: "office@nilgiri.example".into(),
            phone: "+91 423 244 1234".into(),
            region: "Tamil Nadu".into(),
            active: true,
        }
    }

    #[test]
    fn accepts_well_formed_input() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn rejects_email_without_domain_dot() {
        let mut i = input();
        i.email = "office@nilgiri".into();
        assert_eq!(i.validate().unwrap_err(), "Email address is not valid");
    }

    #[test]
    fn rejects_short_phone() {
        let mut i = input();
        i.phone = "12345".into();
        assert_eq!(
            i.validate().unwrap_err(),
            "Phone number must contain at least 7 digits"
        );
    }
}
