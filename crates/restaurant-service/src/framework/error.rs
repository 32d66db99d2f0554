//! # Service Errors
//!
//! Failures of the actor plumbing itself. Domain rejections never show up here;
//! they travel inside each engine's reply.

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Unexpected reply to {0}")]
    UnexpectedReply(&'static str),
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
