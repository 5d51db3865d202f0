use giftbot::Config;
use serial_test::serial;
use teloxide::types::UserId;

#[test]
#[serial]
fn config_requires_admin_id() {
    std::env::remove_var("ADMIN_ID");
    std::env::remove_var("GIFTS_FILE");
    assert!(Config::from_env().is_err());
}

#[test]
#[serial]
fn config_rejects_non_numeric_admin_id() {
    std::env::set_var("ADMIN_ID", "not-a-number");
    std::env::remove_var("GIFTS_FILE");
    assert!(Config::from_env().is_err());
}

#[test]
#[serial]
fn config_defaults_gifts_file() {
    std::env::set_var("ADMIN_ID", "42");
    std::env::remove_var("GIFTS_FILE");
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.admin_id, UserId(42));
    assert_eq!(cfg.gifts_file, std::path::PathBuf::from("gifts.json"));
    assert!(cfg.is_admin(UserId(42)));
    assert!(!cfg.is_admin(UserId(43)));
}

#[test]
#[serial]
fn config_honors_custom_gifts_file() {
    std::env::set_var("ADMIN_ID", "42");
    std::env::set_var("GIFTS_FILE", "/tmp/wishlist.json");
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.gifts_file, std::path::PathBuf::from("/tmp/wishlist.json"));
    std::env::remove_var("GIFTS_FILE");
}
