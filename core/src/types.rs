/// A greeting returned by the service, as parsed from an `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub body: String,
    /// Value of the `content-type` response header, if the host reported one.
    pub content_type: Option<String>,
}

impl Greeting {
    pub fn contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }
}
