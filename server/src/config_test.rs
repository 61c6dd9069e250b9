use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("ADMIN_BACKEND_URL");
        std::env::remove_var("CATALOG_DIR");
        std::env::remove_var("CHAT_REPLY_DELAY_MS");
    }
}

#[test]
fn config_reads_defaults_and_overrides() {
    unsafe { clear_env() };

    let admin = AdminConfig::from_env().unwrap();
    assert_eq!(admin, AdminConfig { port: DEFAULT_ADMIN_PORT, backend_url: DEFAULT_BACKEND_URL.into() });

    let student = StudentConfig::from_env().unwrap();
    assert_eq!(student.port, DEFAULT_STUDENT_PORT);
    assert_eq!(student.chat_reply_delay, Duration::from_millis(DEFAULT_CHAT_REPLY_DELAY_MS));
    assert!(student.catalog_dir.ends_with("data"));

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("ADMIN_BACKEND_URL", " https://backend.test/ ");
        std::env::set_var("CATALOG_DIR", "/srv/catalog");
        std::env::set_var("CHAT_REPLY_DELAY_MS", "0");
    }
    let admin = AdminConfig::from_env().unwrap();
    assert_eq!(admin.port, 8080);
    assert_eq!(admin.backend_url, "https://backend.test");
    let student = StudentConfig::from_env().unwrap();
    assert_eq!(student.catalog_dir, PathBuf::from("/srv/catalog"));
    assert_eq!(student.chat_reply_delay, Duration::ZERO);

    unsafe {
        std::env::set_var("PORT", "eighty");
    }
    assert_eq!(
        AdminConfig::from_env().unwrap_err(),
        ConfigError::InvalidNumber { var: "PORT", value: "eighty".into() }
    );

    unsafe {
        std::env::remove_var("PORT");
        std::env::set_var("CHAT_REPLY_DELAY_MS", "-5");
    }
    assert!(matches!(
        StudentConfig::from_env(),
        Err(ConfigError::InvalidNumber { var: "CHAT_REPLY_DELAY_MS", .. })
    ));

    unsafe { clear_env() };
}
