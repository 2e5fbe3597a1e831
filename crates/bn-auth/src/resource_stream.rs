//! Adapts a single session operation into its `Loading` -> terminal stream.

use crate::{AuthError, AuthResult};

use bn_core::Resource;

use std::any::Any;
use std::future::{Future, ready};
use std::panic::AssertUnwindSafe;

use futures::{FutureExt, StreamExt, stream, stream::BoxStream};
use log::error;

/// `Loading`, then exactly one `Success` or `Error`.
///
/// Each call returns a fresh stream. Dropping it before the terminal state
/// cancels the in-flight request and discards its result.
pub type ResourceStream<'a, T> = BoxStream<'a, Resource<T>>;

pub(crate) fn resource_stream<'a, T, F>(operation: F) -> ResourceStream<'a, T>
where
    T: Send + 'a,
    F: Future<Output = AuthResult<T>> + Send + 'a,
{
    let terminal = AssertUnwindSafe(operation)
        .catch_unwind()
        .map(|outcome| match outcome {
            Ok(result) => into_resource(result),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("Session operation panicked: {message}");
                into_resource(Err(AuthError::unexpected(message)))
            }
        });

    stream::once(ready(Resource::Loading))
        .chain(stream::once(terminal))
        .boxed()
}

/// Maps an operation result to its terminal state, keeping the error as the cause.
pub fn into_resource<T>(result: AuthResult<T>) -> Resource<T> {
    match result {
        Ok(value) => Resource::Success(value),
        Err(err) => Resource::error_with_cause(err.user_message(), err),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_string()
    }
}
