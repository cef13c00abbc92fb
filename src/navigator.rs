//! Where a submitted keyword goes
//!
//! The prompt runs in the terminal, so "navigating to results" means printing the result
//! target on stdout once the terminal is restored: the keyword itself, or a results URL.

use std::io::{self, Write};

use reqwest::Url;

use crate::config::NavigationConfig;

pub trait ResultsNavigator {
    fn navigate_to_results(&mut self, keyword: &str) -> io::Result<()>;
}

pub struct StdoutNavigator<W: Write> {
    out: W,
    results_url: Option<String>,
    results_param: String,
}

impl StdoutNavigator<io::Stdout> {
    pub fn from_config(config: &NavigationConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> StdoutNavigator<W> {
    pub fn new(out: W, config: &NavigationConfig) -> Self {
        Self {
            out,
            results_url: config.results_url.clone(),
            results_param: config.results_param.clone(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn target(&self, keyword: &str) -> String {
        let Some(base) = &self.results_url else {
            return keyword.to_string();
        };

        match Url::parse_with_params(base, &[(self.results_param.as_str(), keyword)]) {
            Ok(url) => url.to_string(),
            Err(e) => {
                log::warn!("Invalid results_url {:?}: {}", base, e);
                keyword.to_string()
            }
        }
    }
}

impl<W: Write> ResultsNavigator for StdoutNavigator<W> {
    fn navigate_to_results(&mut self, keyword: &str) -> io::Result<()> {
        let target = self.target(keyword);
        writeln!(self.out, "{}", target)?;
        self.out.flush()
    }
}
