use std::future::Future;

use myn_models::{contact::SubmissionResult, inquiry::InquiryInput};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validate an inquiry and, if it is well formed, email it to the
    /// business's intake address.
    ///
    /// `previous` carries the result of an earlier attempt when the client
    /// resubmits after a failure. It does not influence the outcome.
    fn submit_inquiry(
        &self,
        previous: Option<SubmissionResult>,
        input: InquiryInput,
    ) -> impl Future<Output = SubmissionResult> + Send;
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit_inquiry(mut self, input: InquiryInput, result: SubmissionResult) -> Self {
        self.expect_submit_inquiry()
            .once()
            .with(
                mockall::predicate::eq(None::<SubmissionResult>),
                mockall::predicate::eq(input),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
