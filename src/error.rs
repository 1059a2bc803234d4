//! Startup failure taxonomy.
//!
//! The rendering core has no failure modes of its own; everything here is
//! about the host page not matching the contract in [`crate::config::dom`].

#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    #[error("element #{0} not found")]
    MissingElement(&'static str),

    #[error("no element matches `{0}`")]
    MissingSelector(&'static str),

    #[error("`{target}` is not a {expected}")]
    WrongElementType {
        target: &'static str,
        expected: &'static str,
    },

    #[error("2d canvas context unavailable")]
    NoContext2d,

    #[error("browser `{0}` global unavailable")]
    MissingGlobal(&'static str),
}

#[cfg(target_arch = "wasm32")]
impl From<SetupError> for wasm_bindgen::JsValue {
    fn from(err: SetupError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_contract_entry() {
        assert_eq!(
            SetupError::MissingElement("dna-canvas").to_string(),
            "element #dna-canvas not found"
        );
        assert_eq!(
            SetupError::MissingSelector(".hero").to_string(),
            "no element matches `.hero`"
        );
        assert_eq!(
            SetupError::WrongElementType {
                target: "contact-form",
                expected: "form",
            }
            .to_string(),
            "`contact-form` is not a form"
        );
    }
}
