use cova_probe::CovaConfig;

/// Config pointing at a mock server instead of the production services
pub fn test_config(base_url: &str, output_dir: &str) -> CovaConfig {
    let mut config = CovaConfig::default();
    config.api.base_url = base_url.to_string();
    config.api.auth_url = format!("{}/v1/oauth2/token", base_url);
    config.probe.output_dir = output_dir.to_string();
    config
}
