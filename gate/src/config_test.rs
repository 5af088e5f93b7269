use super::*;

#[test]
fn default_config_uses_named_constants() {
    let config = GateConfig::default();
    assert_eq!(config.modal_close_delay, MODAL_CLOSE_DELAY);
    assert_eq!(config.hydration_ready_delay, HYDRATION_READY_DELAY);
    assert_eq!(config.login_path, "/auth/login");
}

#[test]
fn delay_millis_convert_for_timer_apis() {
    let config = GateConfig::default();
    assert_eq!(config.modal_close_delay_ms(), 300);
    assert_eq!(config.hydration_ready_delay_ms(), 0);
}

#[test]
fn oversized_delay_saturates() {
    let config = GateConfig {
        modal_close_delay: Duration::from_secs(u64::MAX / 1000),
        ..GateConfig::default()
    };
    assert_eq!(config.modal_close_delay_ms(), u32::MAX);
}

#[test]
fn storage_keys_are_distinct() {
    assert_ne!(ACCESS_TOKEN_KEY, USER_INFO_KEY);
}
