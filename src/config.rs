use reqwest::Url;

#[derive(Clone)]
pub struct AppConfig {
    pub base_url: Url,
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://127.0.0.1:8000").expect("default base URL"),
        }
    }
}
