use std::fmt::Display;

/// Logging port used by every use case. Adapters live in the infrastructure layer.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);

    /// Reports a failed action together with its cause at error level.
    fn failure(&self, action: &str, cause: &dyn Display) {
        self.error(&format!("{} failed: {}", action, cause));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        errors: Mutex<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
        fn debug(&self, _message: &str) {}
    }

    #[test]
    fn should_format_failure_as_error() {
        let logger = RecordingLogger::default();

        logger.failure("Saving shopping list", &"repository.database_error");

        let errors = logger.errors.lock().unwrap();
        assert_eq!(
            errors.as_slice(),
            ["Saving shopping list failed: repository.database_error"]
        );
    }
}
