mod client;
mod types;

pub use client::{GeminiClient, UpstreamClient, UpstreamResponse};
pub use types::{
    ApiErrorResponse, BlockReason, Candidate, CandidateContent, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, RequestContent, RequestPart, ResponsePart,
    SafetySetting,
};
