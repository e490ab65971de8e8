use crate::{
    client::RequestHelper,
    config::ApiConfig,
    transport::HttpTransport,
    types::{ApiResponse, Method, PaymentUrlRequest},
};

/// Client for the payment gateway proxy (`{api}/Vnpay`).
#[derive(Debug, Clone)]
pub struct VnpayApi<T> {
    helper: RequestHelper<T>,
}

impl<T: HttpTransport> VnpayApi<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            helper: RequestHelper::new(transport, config, "VNPay API"),
        }
    }

    /// Asks the backend for a gateway redirect URL paying `money` towards
    /// one tuition fee. The amount is forwarded unchecked.
    pub async fn create_payment_url(
        &self,
        student_id: i64,
        tuition_fee_id: i64,
        money: i64,
    ) -> ApiResponse {
        let body = PaymentUrlRequest {
            student_id,
            tuition_fee_id,
            money,
        };
        self.helper
            .send_json(Method::Post, "/CreatePaymentUrl", &body)
            .await
    }
}

/// Pulls the redirect URL out of a successful payment envelope. Accepts a
/// bare JSON string or an object carrying the URL under `paymentUrl`, `url`
/// or `data`.
pub fn payment_url(response: &ApiResponse) -> Option<&str> {
    if !response.success {
        return None;
    }

    response.data.as_str().or_else(|| {
        ["paymentUrl", "url", "data"]
            .iter()
            .find_map(|key| response.data.get(*key).and_then(|v| v.as_str()))
    })
}
