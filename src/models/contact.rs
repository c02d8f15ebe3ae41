use super::Fields;

/// Typed view over a submitted field bag.
///
/// `name` is the only required field. The remaining well-known fields of the
/// default form are optional, and any other key lands in `extra`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub extra: Fields,
}

impl ContactFields {
    pub fn from_fields(mut fields: Fields) -> Result<Self, String> {
        let name = fields
            .remove("name")
            .ok_or_else(|| "Missing required field: name".to_string())?;
        if name.trim().is_empty() {
            return Err("Required field is empty: name".to_string());
        }

        Ok(Self {
            name,
            email: fields.remove("email"),
            phone: fields.remove("phone"),
            message: fields.remove("message"),
            extra: fields,
        })
    }

    /// Flatten back into the stored representation. Absent optional fields
    /// stay absent.
    pub fn into_fields(self) -> Fields {
        let mut fields = self.extra;
        fields.insert("name".to_string(), self.name);
        for (key, value) in [
            ("email", self.email),
            ("phone", self.phone),
            ("message", self.message),
        ] {
            if let Some(value) = value {
                fields.insert(key.to_string(), value);
            }
        }
        fields
    }
}
