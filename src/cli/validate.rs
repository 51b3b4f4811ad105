use vkit_contact::{FieldRole, FieldSpec, FormBinding, blur_error};

/// Message the form would show for `value` when `role` loses focus.
pub fn check_field(binding: &FormBinding, role: FieldRole, value: &str) -> Option<&'static str> {
    let spec = binding
        .spec(role)
        .copied()
        .unwrap_or_else(|| FieldSpec::optional(role));

    blur_error(spec, value)
}
