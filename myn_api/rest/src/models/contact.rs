use myn_models::inquiry::InquiryInput;
use serde::Deserialize;

/// Raw form payload using the website's field names. Fields the client did
/// not send become empty strings and then fail their validation rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiInquiryInput {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellido: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub servicio: String,
    #[serde(default)]
    pub mensaje: String,
}

impl From<ApiInquiryInput> for InquiryInput {
    fn from(value: ApiInquiryInput) -> Self {
        Self {
            first_name: value.nombre,
            last_name: value.apellido,
            phone: value.telefono,
            email: value.email,
            service: value.servicio,
            message: value.mensaje,
        }
    }
}
