use vkit_shared::contact::FieldRole;

use crate::FormSurface;

pub const DEFAULT_FORM_ID: &str = "contactForm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub role: FieldRole,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(role: FieldRole) -> Self {
        Self {
            role,
            required: true,
        }
    }

    pub fn optional(role: FieldRole) -> Self {
        Self {
            role,
            required: false,
        }
    }
}

/// Which form to bind and which of its fields must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBinding {
    pub form_id: String,
    pub fields: Vec<FieldSpec>,
}

impl Default for FormBinding {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_ID)
    }
}

impl FormBinding {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            fields: vec![
                FieldSpec::required(FieldRole::Name),
                FieldSpec::required(FieldRole::Email),
                FieldSpec::optional(FieldRole::Phone),
                FieldSpec::required(FieldRole::Message),
            ],
        }
    }

    pub fn spec(&self, role: FieldRole) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.role == role)
    }

    /// Specs of the fields actually present on `surface`.
    ///
    /// Fails with the first required role the surface lacks.
    pub fn resolve(&self, surface: &impl FormSurface) -> Result<Vec<FieldSpec>, FieldRole> {
        let mut bound = Vec::with_capacity(self.fields.len());
        for spec in &self.fields {
            if surface.has_field(spec.role) {
                bound.push(*spec);
            } else if spec.required {
                return Err(spec.role);
            }
        }

        Ok(bound)
    }
}
