use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

/// Data for the inquiry notification email sent to the business's intake
/// address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryEmailTemplate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    /// Message body, newlines already converted to `<br>`.
    pub message: String,
}

impl Template for InquiryEmailTemplate {
    const NAME: &'static str = "InquiryEmailTemplate";
    const TEMPLATE: &'static str = include_str!("../templates/inquiry.html");
}

pub const TEMPLATES: &[(&str, &str)] =
    &[(InquiryEmailTemplate::NAME, InquiryEmailTemplate::TEMPLATE)];
