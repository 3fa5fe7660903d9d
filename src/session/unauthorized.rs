/// Where the user is sent once the server rejects their credentials.
pub const LOGIN_PATH: &str = "/login";

/// Hook run after a 401 response, once the stored token has been cleared.
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self, location: &str);
}

impl<F> UnauthorizedHandler for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_unauthorized(&self, location: &str) {
        self(location)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHandler;

impl UnauthorizedHandler for NoopHandler {
    fn on_unauthorized(&self, _location: &str) {}
}
