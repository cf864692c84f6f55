pub mod category_urls;
pub mod payload_limit;

pub use category_urls::category_doc_url;
pub use payload_limit::{shape_payload, ShapedPayload, MAX_DESCRIPTION};
