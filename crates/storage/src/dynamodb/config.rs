use std::env;

use aws_sdk_dynamodb::Client;

/// DynamoDB connection settings loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoDbConfig {
    /// Table holding the items (default: "picus-data")
    pub table_name: String,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Custom endpoint URL, e.g. for DynamoDB Local
    pub endpoint_url: Option<String>,
}

impl DynamoDbConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "picus-data")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Endpoint override (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source, applying defaults
    /// for unset names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("DYNAMODB_TABLE_NAME").unwrap_or_else(|| "picus-data".to_string()),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            endpoint_url: lookup("AWS_ENDPOINT_URL"),
        }
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({url}) table {}", self.table_name),
            None => format!(
                "AWS DynamoDB (region: {}) table {}",
                self.region, self.table_name
            ),
        }
    }

    /// Creates a DynamoDB client using the default credential chain.
    pub async fn create_client(&self) -> Client {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(self.region.clone()));

        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Client::new(&sdk_config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_target_display_local() {
        let config = DynamoDbConfig {
            table_name: "picus-data".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: Some("http://localhost:8000".to_string()),
        };

        assert_eq!(
            config.target_display(),
            "Local DynamoDB (http://localhost:8000) table picus-data"
        );
    }

    #[test]
    fn test_target_display_aws() {
        let config = DynamoDbConfig {
            table_name: "items".to_string(),
            region: "eu-west-1".to_string(),
            endpoint_url: None,
        };

        assert_eq!(
            config.target_display(),
            "AWS DynamoDB (region: eu-west-1) table items"
        );
    }

    #[test]
    fn test_default_values() {
        let config = DynamoDbConfig::from_lookup(|_| None);

        assert_eq!(config.table_name, "picus-data");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url, None);
    }

    #[test]
    fn test_values_from_lookup() {
        let vars = HashMap::from([
            ("DYNAMODB_TABLE_NAME", "items"),
            ("AWS_REGION", "eu-west-1"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
        ]);

        let config = DynamoDbConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.table_name, "items");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
    }
}
