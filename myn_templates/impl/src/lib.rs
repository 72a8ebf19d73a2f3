use std::sync::Arc;

use myn_templates_contracts::{Template, TemplateService, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl Default for TemplateServiceImpl {
    fn default() -> Self {
        let mut tera = Tera::default();

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self { tera: tera.into() }
    }
}

impl TemplateServiceImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.tera.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use myn_templates_contracts::InquiryEmailTemplate;

    use super::*;

    #[test]
    fn inquiry_email() {
        let sut = TemplateServiceImpl::new();

        let html = sut
            .render(&InquiryEmailTemplate {
                first_name: "Juan".into(),
                last_name: "Pérez".into(),
                phone: "1123456789".into(),
                email: "juan@test.com".into(),
                service: "Pintura en general".into(),
                message: "Necesito pintar mi casa.<br>Saludos".into(),
            })
            .unwrap();

        assert!(html.contains("<h1>Nueva consulta desde el sitio web</h1>"));
        assert!(html.contains("<strong>Nombre:</strong> Juan Pérez"));
        assert!(html.contains("<strong>Teléfono:</strong> 1123456789"));
        assert!(html.contains("<strong>Email:</strong> juan@test.com"));
        assert!(html.contains("<strong>Servicio de interés:</strong> Pintura en general"));
        assert!(html.contains("Necesito pintar mi casa.<br>Saludos"));
        assert!(html.contains("formulario de contacto"));
    }
}
