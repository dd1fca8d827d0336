use ripple_core::Config;

#[test]
fn defaults_place_reset_at_memory_base() {
    let config = Config::default();
    assert_eq!(config.mem_base, 0x0100_0000);
    assert_eq!(config.mem_size, 0x0010_0000);
    assert_eq!(config.reset_pc, config.mem_base);
}

#[test]
fn partial_json_keeps_defaults() {
    let config: Config = serde_json::from_str(r#"{ "mem_size": 4096 }"#).unwrap();
    assert_eq!(config.mem_size, 4096);
    assert_eq!(config.mem_base, 0x0100_0000);
    assert_eq!(config.reset_pc, 0x0100_0000);
}

#[test]
fn full_json_overrides_everything() {
    let config: Config = serde_json::from_str(
        r#"{ "mem_base": 32768, "mem_size": 1024, "reset_pc": 32772 }"#,
    )
    .unwrap();
    assert_eq!(config.mem_base, 0x8000);
    assert_eq!(config.mem_size, 1024);
    assert_eq!(config.reset_pc, 0x8004);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<Config>(r#"{ "mem_bse": 1 }"#).is_err());
}
