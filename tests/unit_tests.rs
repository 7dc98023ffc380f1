//! Public surface that needs no client: status mapping, enums, flags,
//! configuration and library loading failures.

use std::path::PathBuf;

use discord_game_sdk::types::{
    ActivityJoinRequestReply, CreateFlags, EntitlementType, LobbySearchComparison,
    LobbySearchDistance, LogLevel, SkuType,
};
use discord_game_sdk::{ClientConfig, DEFAULT_LIBRARY_NAME, Discord, Error, SdkLibrary, sys};

#[test]
fn ok_maps_to_unit() {
    assert!(Error::from_code(sys::EDiscordResult_DiscordResult_Ok).is_ok());
}

#[test]
fn every_known_status_maps_to_its_code() {
    for code in 1..=43 {
        let err = Error::from_code(code).unwrap_err();
        let result = err.as_discord_error().expect("known status");
        assert_eq!(i32::from(result), code);
    }
}

#[test]
fn unknown_status_is_kept() {
    assert!(matches!(Error::from_code(44), Err(Error::UnknownResult(44))));
    assert!(matches!(Error::from_code(-1), Err(Error::UnknownResult(-1))));
}

#[test]
fn status_display_names_the_code() {
    let err = Error::from_code(sys::EDiscordResult_DiscordResult_NotRunning).unwrap_err();
    assert!(err.to_string().contains("NotRunning"));
}

#[test]
fn caller_side_enums_reject_unknown_values() {
    assert!(LogLevel::try_from(0).is_err());
    assert!(ActivityJoinRequestReply::try_from(3).is_err());
    assert_eq!(
        LobbySearchComparison::try_from(-2).ok(),
        Some(LobbySearchComparison::LessThanOrEqual)
    );
    assert_eq!(LobbySearchDistance::default(), LobbySearchDistance::Default);
}

#[test]
fn record_enums_keep_unknown_values() {
    assert_eq!(SkuType::from(4), SkuType::Bundle);
    assert_eq!(SkuType::from(99), SkuType::Unknown(99));
    assert_eq!(i32::from(EntitlementType::Unknown(42)), 42);
}

#[test]
fn create_flags_default_to_requiring_discord() {
    assert!(CreateFlags::default().is_empty());
    assert_eq!(CreateFlags::NO_REQUIRE_DISCORD.bits(), 1);
}

#[test]
fn builder_produces_a_config() {
    let config = Discord::builder(758184866411315221)
        .flags(CreateFlags::NO_REQUIRE_DISCORD)
        .library_path("vendor/libdiscord_game_sdk.so");
    assert_eq!(config, {
        let mut expected = ClientConfig::new(758184866411315221);
        expected.flags = CreateFlags::NO_REQUIRE_DISCORD;
        expected.library_path = Some(PathBuf::from("vendor/libdiscord_game_sdk.so"));
        expected
    });
}

#[test]
fn default_library_name_matches_the_vendor_artifact() {
    assert!(DEFAULT_LIBRARY_NAME.contains("discord_game_sdk"));
}

#[test]
fn missing_library_is_a_library_error() {
    let err = SdkLibrary::load("/nonexistent/libdiscord_game_sdk.so").unwrap_err();
    assert!(matches!(err, Error::Library(_)));
}

#[test]
fn building_without_the_sdk_fails_cleanly() {
    let config = ClientConfig::new(1).library_path("/nonexistent/libdiscord_game_sdk.so");
    assert!(matches!(config.clone().build(), Err(Error::Library(_))));
    // The single-instance guard was never taken, so a retry fails the same way.
    assert!(matches!(config.build(), Err(Error::Library(_))));
}
