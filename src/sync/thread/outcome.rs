use std::any::Any;
use std::fmt::Display;

/// The value returned by a thread's callback.
///
/// A callback either returns nothing or a [`Result`], whose error is reported when the thread is
/// joined.
pub trait Outcome {
    /// Returns the failure message carried by this outcome, if there is one.
    fn failure(self) -> Option<String>;
}

impl Outcome for () {
    fn failure(self) -> Option<String> {
        None
    }
}

impl<E: Display> Outcome for Result<(), E> {
    fn failure(self) -> Option<String> {
        self.err().map(|error| error.to_string())
    }
}

/// Extracts the message from the payload of a caught panic.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        String::from(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("unknown panic payload")
    }
}
