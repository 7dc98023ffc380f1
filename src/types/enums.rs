use bitflags::bitflags;
use discord_game_sdk_sys as sys;
use num_enum::{FromPrimitive, IntoPrimitive, TryFromPrimitive};

// Result Codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum ResultCode {
    Ok = sys::EDiscordResult_DiscordResult_Ok,
    ServiceUnavailable = sys::EDiscordResult_DiscordResult_ServiceUnavailable,
    InvalidVersion = sys::EDiscordResult_DiscordResult_InvalidVersion,
    LockFailed = sys::EDiscordResult_DiscordResult_LockFailed,
    InternalError = sys::EDiscordResult_DiscordResult_InternalError,
    InvalidPayload = sys::EDiscordResult_DiscordResult_InvalidPayload,
    InvalidCommand = sys::EDiscordResult_DiscordResult_InvalidCommand,
    InvalidPermissions = sys::EDiscordResult_DiscordResult_InvalidPermissions,
    NotFetched = sys::EDiscordResult_DiscordResult_NotFetched,
    NotFound = sys::EDiscordResult_DiscordResult_NotFound,
    Conflict = sys::EDiscordResult_DiscordResult_Conflict,
    InvalidSecret = sys::EDiscordResult_DiscordResult_InvalidSecret,
    InvalidJoinSecret = sys::EDiscordResult_DiscordResult_InvalidJoinSecret,
    NoEligibleActivity = sys::EDiscordResult_DiscordResult_NoEligibleActivity,
    InvalidInvite = sys::EDiscordResult_DiscordResult_InvalidInvite,
    NotAuthenticated = sys::EDiscordResult_DiscordResult_NotAuthenticated,
    InvalidAccessToken = sys::EDiscordResult_DiscordResult_InvalidAccessToken,
    ApplicationMismatch = sys::EDiscordResult_DiscordResult_ApplicationMismatch,
    InvalidDataUrl = sys::EDiscordResult_DiscordResult_InvalidDataUrl,
    InvalidBase64 = sys::EDiscordResult_DiscordResult_InvalidBase64,
    NotFiltered = sys::EDiscordResult_DiscordResult_NotFiltered,
    LobbyFull = sys::EDiscordResult_DiscordResult_LobbyFull,
    InvalidLobbySecret = sys::EDiscordResult_DiscordResult_InvalidLobbySecret,
    InvalidFilename = sys::EDiscordResult_DiscordResult_InvalidFilename,
    InvalidFileSize = sys::EDiscordResult_DiscordResult_InvalidFileSize,
    InvalidEntitlement = sys::EDiscordResult_DiscordResult_InvalidEntitlement,
    NotInstalled = sys::EDiscordResult_DiscordResult_NotInstalled,
    NotRunning = sys::EDiscordResult_DiscordResult_NotRunning,
    InsufficientBuffer = sys::EDiscordResult_DiscordResult_InsufficientBuffer,
    PurchaseCanceled = sys::EDiscordResult_DiscordResult_PurchaseCanceled,
    InvalidGuild = sys::EDiscordResult_DiscordResult_InvalidGuild,
    InvalidEvent = sys::EDiscordResult_DiscordResult_InvalidEvent,
    InvalidChannel = sys::EDiscordResult_DiscordResult_InvalidChannel,
    InvalidOrigin = sys::EDiscordResult_DiscordResult_InvalidOrigin,
    RateLimited = sys::EDiscordResult_DiscordResult_RateLimited,
    OAuth2Error = sys::EDiscordResult_DiscordResult_OAuth2Error,
    SelectChannelTimeout = sys::EDiscordResult_DiscordResult_SelectChannelTimeout,
    GetGuildTimeout = sys::EDiscordResult_DiscordResult_GetGuildTimeout,
    SelectVoiceForceRequired = sys::EDiscordResult_DiscordResult_SelectVoiceForceRequired,
    CaptureShortcutAlreadyListening =
        sys::EDiscordResult_DiscordResult_CaptureShortcutAlreadyListening,
    UnauthorizedForAchievement = sys::EDiscordResult_DiscordResult_UnauthorizedForAchievement,
    InvalidGiftCode = sys::EDiscordResult_DiscordResult_InvalidGiftCode,
    PurchaseError = sys::EDiscordResult_DiscordResult_PurchaseError,
    TransactionAborted = sys::EDiscordResult_DiscordResult_TransactionAborted,
}

// Log Levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum LogLevel {
    Error = sys::EDiscordLogLevel_DiscordLogLevel_Error,
    Warn = sys::EDiscordLogLevel_DiscordLogLevel_Warn,
    Info = sys::EDiscordLogLevel_DiscordLogLevel_Info,
    Debug = sys::EDiscordLogLevel_DiscordLogLevel_Debug,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
        }
    }
}

// Users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum PremiumType {
    None = sys::EDiscordPremiumType_DiscordPremiumType_None,
    Tier1 = sys::EDiscordPremiumType_DiscordPremiumType_Tier1,
    Tier2 = sys::EDiscordPremiumType_DiscordPremiumType_Tier2,
    #[num_enum(catch_all)]
    Unknown(i32),
}

// Images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum ImageType {
    User = sys::EDiscordImageType_DiscordImageType_User,
    #[num_enum(catch_all)]
    Unknown(i32),
}

// Activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum ActivityType {
    Playing = sys::EDiscordActivityType_DiscordActivityType_Playing,
    Streaming = sys::EDiscordActivityType_DiscordActivityType_Streaming,
    Listening = sys::EDiscordActivityType_DiscordActivityType_Listening,
    Watching = sys::EDiscordActivityType_DiscordActivityType_Watching,
    #[num_enum(catch_all)]
    Unknown(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum ActivityActionType {
    Join = sys::EDiscordActivityActionType_DiscordActivityActionType_Join,
    Spectate = sys::EDiscordActivityActionType_DiscordActivityActionType_Spectate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum ActivityJoinRequestReply {
    No = sys::EDiscordActivityJoinRequestReply_DiscordActivityJoinRequestReply_No,
    Yes = sys::EDiscordActivityJoinRequestReply_DiscordActivityJoinRequestReply_Yes,
    Ignore = sys::EDiscordActivityJoinRequestReply_DiscordActivityJoinRequestReply_Ignore,
}

// Relationships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum Status {
    Offline = sys::EDiscordStatus_DiscordStatus_Offline,
    Online = sys::EDiscordStatus_DiscordStatus_Online,
    Idle = sys::EDiscordStatus_DiscordStatus_Idle,
    DoNotDisturb = sys::EDiscordStatus_DiscordStatus_DoNotDisturb,
    #[num_enum(catch_all)]
    Unknown(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum RelationshipType {
    None = sys::EDiscordRelationshipType_DiscordRelationshipType_None,
    Friend = sys::EDiscordRelationshipType_DiscordRelationshipType_Friend,
    Blocked = sys::EDiscordRelationshipType_DiscordRelationshipType_Blocked,
    PendingIncoming = sys::EDiscordRelationshipType_DiscordRelationshipType_PendingIncoming,
    PendingOutgoing = sys::EDiscordRelationshipType_DiscordRelationshipType_PendingOutgoing,
    Implicit = sys::EDiscordRelationshipType_DiscordRelationshipType_Implicit,
    #[num_enum(catch_all)]
    Unknown(i32),
}

// Lobbies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum LobbyType {
    Private = sys::EDiscordLobbyType_DiscordLobbyType_Private,
    Public = sys::EDiscordLobbyType_DiscordLobbyType_Public,
    #[num_enum(catch_all)]
    Unknown(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum LobbySearchComparison {
    LessThanOrEqual =
        sys::EDiscordLobbySearchComparison_DiscordLobbySearchComparison_LessThanOrEqual,
    LessThan = sys::EDiscordLobbySearchComparison_DiscordLobbySearchComparison_LessThan,
    Equal = sys::EDiscordLobbySearchComparison_DiscordLobbySearchComparison_Equal,
    GreaterThan = sys::EDiscordLobbySearchComparison_DiscordLobbySearchComparison_GreaterThan,
    GreaterThanOrEqual =
        sys::EDiscordLobbySearchComparison_DiscordLobbySearchComparison_GreaterThanOrEqual,
    NotEqual = sys::EDiscordLobbySearchComparison_DiscordLobbySearchComparison_NotEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum LobbySearchCast {
    String = sys::EDiscordLobbySearchCast_DiscordLobbySearchCast_String,
    Number = sys::EDiscordLobbySearchCast_DiscordLobbySearchCast_Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum LobbySearchDistance {
    Local = sys::EDiscordLobbySearchDistance_DiscordLobbySearchDistance_Local,
    Default = sys::EDiscordLobbySearchDistance_DiscordLobbySearchDistance_Default,
    Extended = sys::EDiscordLobbySearchDistance_DiscordLobbySearchDistance_Extended,
    Global = sys::EDiscordLobbySearchDistance_DiscordLobbySearchDistance_Global,
}

// Store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum SkuType {
    Application = sys::EDiscordSkuType_DiscordSkuType_Application,
    Dlc = sys::EDiscordSkuType_DiscordSkuType_DLC,
    Consumable = sys::EDiscordSkuType_DiscordSkuType_Consumable,
    Bundle = sys::EDiscordSkuType_DiscordSkuType_Bundle,
    #[num_enum(catch_all)]
    Unknown(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum EntitlementType {
    Purchase = sys::EDiscordEntitlementType_DiscordEntitlementType_Purchase,
    PremiumSubscription = sys::EDiscordEntitlementType_DiscordEntitlementType_PremiumSubscription,
    DeveloperGift = sys::EDiscordEntitlementType_DiscordEntitlementType_DeveloperGift,
    TestModePurchase = sys::EDiscordEntitlementType_DiscordEntitlementType_TestModePurchase,
    FreePurchase = sys::EDiscordEntitlementType_DiscordEntitlementType_FreePurchase,
    UserGift = sys::EDiscordEntitlementType_DiscordEntitlementType_UserGift,
    PremiumPurchase = sys::EDiscordEntitlementType_DiscordEntitlementType_PremiumPurchase,
    #[num_enum(catch_all)]
    Unknown(i32),
}

// Voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum InputModeType {
    VoiceActivity = sys::EDiscordInputModeType_DiscordInputModeType_VoiceActivity,
    PushToTalk = sys::EDiscordInputModeType_DiscordInputModeType_PushToTalk,
    #[num_enum(catch_all)]
    Unknown(i32),
}

macro_rules! default_variant {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl Default for $ty {
                fn default() -> Self {
                    Self::$variant
                }
            }
        )*
    };
}

default_variant!(
    PremiumType => None,
    ImageType => User,
    ActivityType => Playing,
    Status => Offline,
    RelationshipType => None,
    LobbyType => Private,
    LobbySearchDistance => Default,
    InputModeType => VoiceActivity,
);

bitflags! {
    /// Flags passed to `DiscordCreate`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CreateFlags: u64 {
        /// Do not require the Discord desktop client to be running.
        const NO_REQUIRE_DISCORD =
            sys::EDiscordCreateFlags_DiscordCreateFlags_NoRequireDiscord as u64;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UserFlags: i32 {
        const PARTNER = sys::EDiscordUserFlag_DiscordUserFlag_Partner;
        const HYPE_SQUAD_EVENTS = sys::EDiscordUserFlag_DiscordUserFlag_HypeSquadEvents;
        const HYPE_SQUAD_HOUSE1 = sys::EDiscordUserFlag_DiscordUserFlag_HypeSquadHouse1;
        const HYPE_SQUAD_HOUSE2 = sys::EDiscordUserFlag_DiscordUserFlag_HypeSquadHouse2;
        const HYPE_SQUAD_HOUSE3 = sys::EDiscordUserFlag_DiscordUserFlag_HypeSquadHouse3;
    }
}
