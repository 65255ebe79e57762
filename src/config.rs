// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub confluence: ConfluenceConfig,
    pub vision: VisionConfig,
    pub openai: OpenAiConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfluenceConfig {
    pub base_url: String,
    pub username: String,
    pub api_token: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VisionConfig {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    pub deployment: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    pub image_workers: usize,
    pub search_limit: usize,
    pub request_timeout_secs: u64,
    pub intake_temperature: f32,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("HELPDESK_SUMMARIZE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            confluence: ConfluenceConfig {
                base_url: "https://your-company.atlassian.net/wiki".to_string(),
                username: "svc-helpdesk".to_string(),
                api_token: String::new(),
            },
            vision: VisionConfig {
                endpoint: "https://your-cv-resource.cognitiveservices.azure.com".to_string(),
                api_key: String::new(),
            },
            openai: OpenAiConfig {
                endpoint: "https://your-resource.openai.azure.com".to_string(),
                api_key: String::new(),
                api_version: "2023-05-15".to_string(),
                deployment: "gpt-35-turbo".to_string(),
            },
            pipeline: PipelineConfig {
                image_workers: 5,
                search_limit: 10,
                request_timeout_secs: 30,
                intake_temperature: 0.2,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_endpoint_url(&self.confluence.base_url)?;
        Validator::validate_endpoint_url(&self.vision.endpoint)?;
        Validator::validate_endpoint_url(&self.openai.endpoint)?;

        if self.pipeline.image_workers == 0 {
            return Err(PipelineError::Config(
                "image_workers must be greater than 0".to_string(),
            ));
        }

        if self.pipeline.search_limit == 0 {
            return Err(PipelineError::Config(
                "search_limit must be greater than 0".to_string(),
            ));
        }

        if self.pipeline.request_timeout_secs == 0 {
            return Err(PipelineError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
