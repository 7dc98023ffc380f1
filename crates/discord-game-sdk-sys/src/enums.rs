pub type EDiscordResult = i32;
pub const EDiscordResult_DiscordResult_Ok: EDiscordResult = 0;
pub const EDiscordResult_DiscordResult_ServiceUnavailable: EDiscordResult = 1;
pub const EDiscordResult_DiscordResult_InvalidVersion: EDiscordResult = 2;
pub const EDiscordResult_DiscordResult_LockFailed: EDiscordResult = 3;
pub const EDiscordResult_DiscordResult_InternalError: EDiscordResult = 4;
pub const EDiscordResult_DiscordResult_InvalidPayload: EDiscordResult = 5;
pub const EDiscordResult_DiscordResult_InvalidCommand: EDiscordResult = 6;
pub const EDiscordResult_DiscordResult_InvalidPermissions: EDiscordResult = 7;
pub const EDiscordResult_DiscordResult_NotFetched: EDiscordResult = 8;
pub const EDiscordResult_DiscordResult_NotFound: EDiscordResult = 9;
pub const EDiscordResult_DiscordResult_Conflict: EDiscordResult = 10;
pub const EDiscordResult_DiscordResult_InvalidSecret: EDiscordResult = 11;
pub const EDiscordResult_DiscordResult_InvalidJoinSecret: EDiscordResult = 12;
pub const EDiscordResult_DiscordResult_NoEligibleActivity: EDiscordResult = 13;
pub const EDiscordResult_DiscordResult_InvalidInvite: EDiscordResult = 14;
pub const EDiscordResult_DiscordResult_NotAuthenticated: EDiscordResult = 15;
pub const EDiscordResult_DiscordResult_InvalidAccessToken: EDiscordResult = 16;
pub const EDiscordResult_DiscordResult_ApplicationMismatch: EDiscordResult = 17;
pub const EDiscordResult_DiscordResult_InvalidDataUrl: EDiscordResult = 18;
pub const EDiscordResult_DiscordResult_InvalidBase64: EDiscordResult = 19;
pub const EDiscordResult_DiscordResult_NotFiltered: EDiscordResult = 20;
pub const EDiscordResult_DiscordResult_LobbyFull: EDiscordResult = 21;
pub const EDiscordResult_DiscordResult_InvalidLobbySecret: EDiscordResult = 22;
pub const EDiscordResult_DiscordResult_InvalidFilename: EDiscordResult = 23;
pub const EDiscordResult_DiscordResult_InvalidFileSize: EDiscordResult = 24;
pub const EDiscordResult_DiscordResult_InvalidEntitlement: EDiscordResult = 25;
pub const EDiscordResult_DiscordResult_NotInstalled: EDiscordResult = 26;
pub const EDiscordResult_DiscordResult_NotRunning: EDiscordResult = 27;
pub const EDiscordResult_DiscordResult_InsufficientBuffer: EDiscordResult = 28;
pub const EDiscordResult_DiscordResult_PurchaseCanceled: EDiscordResult = 29;
pub const EDiscordResult_DiscordResult_InvalidGuild: EDiscordResult = 30;
pub const EDiscordResult_DiscordResult_InvalidEvent: EDiscordResult = 31;
pub const EDiscordResult_DiscordResult_InvalidChannel: EDiscordResult = 32;
pub const EDiscordResult_DiscordResult_InvalidOrigin: EDiscordResult = 33;
pub const EDiscordResult_DiscordResult_RateLimited: EDiscordResult = 34;
pub const EDiscordResult_DiscordResult_OAuth2Error: EDiscordResult = 35;
pub const EDiscordResult_DiscordResult_SelectChannelTimeout: EDiscordResult = 36;
pub const EDiscordResult_DiscordResult_GetGuildTimeout: EDiscordResult = 37;
pub const EDiscordResult_DiscordResult_SelectVoiceForceRequired: EDiscordResult = 38;
pub const EDiscordResult_DiscordResult_CaptureShortcutAlreadyListening: EDiscordResult = 39;
pub const EDiscordResult_DiscordResult_UnauthorizedForAchievement: EDiscordResult = 40;
pub const EDiscordResult_DiscordResult_InvalidGiftCode: EDiscordResult = 41;
pub const EDiscordResult_DiscordResult_PurchaseError: EDiscordResult = 42;
pub const EDiscordResult_DiscordResult_TransactionAborted: EDiscordResult = 43;

pub type EDiscordCreateFlags = i32;
pub const EDiscordCreateFlags_DiscordCreateFlags_Default: EDiscordCreateFlags = 0;
pub const EDiscordCreateFlags_DiscordCreateFlags_NoRequireDiscord: EDiscordCreateFlags = 1;

pub type EDiscordLogLevel = i32;
pub const EDiscordLogLevel_DiscordLogLevel_Error: EDiscordLogLevel = 1;
pub const EDiscordLogLevel_DiscordLogLevel_Warn: EDiscordLogLevel = 2;
pub const EDiscordLogLevel_DiscordLogLevel_Info: EDiscordLogLevel = 3;
pub const EDiscordLogLevel_DiscordLogLevel_Debug: EDiscordLogLevel = 4;

pub type EDiscordUserFlag = i32;
pub const EDiscordUserFlag_DiscordUserFlag_Partner: EDiscordUserFlag = 2;
pub const EDiscordUserFlag_DiscordUserFlag_HypeSquadEvents: EDiscordUserFlag = 4;
pub const EDiscordUserFlag_DiscordUserFlag_HypeSquadHouse1: EDiscordUserFlag = 64;
pub const EDiscordUserFlag_DiscordUserFlag_HypeSquadHouse2: EDiscordUserFlag = 128;
pub const EDiscordUserFlag_DiscordUserFlag_HypeSquadHouse3: EDiscordUserFlag = 256;

pub type EDiscordPremiumType = i32;
pub const EDiscordPremiumType_DiscordPremiumType_None: EDiscordPremiumType = 0;
pub const EDiscordPremiumType_DiscordPremiumType_Tier1: EDiscordPremiumType = 1;
pub const EDiscordPremiumType_DiscordPremiumType_Tier2: EDiscordPremiumType = 2;

pub type EDiscordImageType = i32;
pub const EDiscordImageType_DiscordImageType_User: EDiscordImageType = 0;

pub type EDiscordActivityType = i32;
pub const EDiscordActivityType_DiscordActivityType_Playing: EDiscordActivityType = 0;
pub const EDiscordActivityType_DiscordActivityType_Streaming: EDiscordActivityType = 1;
pub const EDiscordActivityType_DiscordActivityType_Listening: EDiscordActivityType = 2;
pub const EDiscordActivityType_DiscordActivityType_Watching: EDiscordActivityType = 3;

pub type EDiscordActivityActionType = i32;
pub const EDiscordActivityActionType_DiscordActivityActionType_Join: EDiscordActivityActionType = 1;
pub const EDiscordActivityActionType_DiscordActivityActionType_Spectate:
    EDiscordActivityActionType = 2;

pub type EDiscordActivityJoinRequestReply = i32;
pub const EDiscordActivityJoinRequestReply_DiscordActivityJoinRequestReply_No:
    EDiscordActivityJoinRequestReply = 0;
pub const EDiscordActivityJoinRequestReply_DiscordActivityJoinRequestReply_Yes:
    EDiscordActivityJoinRequestReply = 1;
pub const EDiscordActivityJoinRequestReply_DiscordActivityJoinRequestReply_Ignore:
    EDiscordActivityJoinRequestReply = 2;

pub type EDiscordStatus = i32;
pub const EDiscordStatus_DiscordStatus_Offline: EDiscordStatus = 0;
pub const EDiscordStatus_DiscordStatus_Online: EDiscordStatus = 1;
pub const EDiscordStatus_DiscordStatus_Idle: EDiscordStatus = 2;
pub const EDiscordStatus_DiscordStatus_DoNotDisturb: EDiscordStatus = 3;

pub type EDiscordRelationshipType = i32;
pub const EDiscordRelationshipType_DiscordRelationshipType_None: EDiscordRelationshipType = 0;
pub const EDiscordRelationshipType_DiscordRelationshipType_Friend: EDiscordRelationshipType = 1;
pub const EDiscordRelationshipType_DiscordRelationshipType_Blocked: EDiscordRelationshipType = 2;
pub const EDiscordRelationshipType_DiscordRelationshipType_PendingIncoming:
    EDiscordRelationshipType = 3;
pub const EDiscordRelationshipType_DiscordRelationshipType_PendingOutgoing:
    EDiscordRelationshipType = 4;
pub const EDiscordRelationshipType_DiscordRelationshipType_Implicit: EDiscordRelationshipType = 5;

pub type EDiscordLobbyType = i32;
pub const EDiscordLobbyType_DiscordLobbyType_Private: EDiscordLobbyType = 1;
pub const EDiscordLobbyType_DiscordLobbyType_Public: EDiscordLobbyType = 2;

pub type EDiscordLobbySearchComparison = i32;
pub const EDiscordLobbySearchComparison_DiscordLobbySearchComparison_LessThanOrEqual:
    EDiscordLobbySearchComparison = -2;
pub const EDiscordLobbySearchComparison_DiscordLobbySearchComparison_LessThan:
    EDiscordLobbySearchComparison = -1;
pub const EDiscordLobbySearchComparison_DiscordLobbySearchComparison_Equal:
    EDiscordLobbySearchComparison = 0;
pub const EDiscordLobbySearchComparison_DiscordLobbySearchComparison_GreaterThan:
    EDiscordLobbySearchComparison = 1;
pub const EDiscordLobbySearchComparison_DiscordLobbySearchComparison_GreaterThanOrEqual:
    EDiscordLobbySearchComparison = 2;
pub const EDiscordLobbySearchComparison_DiscordLobbySearchComparison_NotEqual:
    EDiscordLobbySearchComparison = 3;

pub type EDiscordLobbySearchCast = i32;
pub const EDiscordLobbySearchCast_DiscordLobbySearchCast_String: EDiscordLobbySearchCast = 1;
pub const EDiscordLobbySearchCast_DiscordLobbySearchCast_Number: EDiscordLobbySearchCast = 2;

pub type EDiscordLobbySearchDistance = i32;
pub const EDiscordLobbySearchDistance_DiscordLobbySearchDistance_Local:
    EDiscordLobbySearchDistance = 0;
pub const EDiscordLobbySearchDistance_DiscordLobbySearchDistance_Default:
    EDiscordLobbySearchDistance = 1;
pub const EDiscordLobbySearchDistance_DiscordLobbySearchDistance_Extended:
    EDiscordLobbySearchDistance = 2;
pub const EDiscordLobbySearchDistance_DiscordLobbySearchDistance_Global:
    EDiscordLobbySearchDistance = 3;

pub type EDiscordEntitlementType = i32;
pub const EDiscordEntitlementType_DiscordEntitlementType_Purchase: EDiscordEntitlementType = 1;
pub const EDiscordEntitlementType_DiscordEntitlementType_PremiumSubscription:
    EDiscordEntitlementType = 2;
pub const EDiscordEntitlementType_DiscordEntitlementType_DeveloperGift: EDiscordEntitlementType = 3;
pub const EDiscordEntitlementType_DiscordEntitlementType_TestModePurchase: EDiscordEntitlementType =
    4;
pub const EDiscordEntitlementType_DiscordEntitlementType_FreePurchase: EDiscordEntitlementType = 5;
pub const EDiscordEntitlementType_DiscordEntitlementType_UserGift: EDiscordEntitlementType = 6;
pub const EDiscordEntitlementType_DiscordEntitlementType_PremiumPurchase: EDiscordEntitlementType =
    7;

pub type EDiscordSkuType = i32;
pub const EDiscordSkuType_DiscordSkuType_Application: EDiscordSkuType = 1;
pub const EDiscordSkuType_DiscordSkuType_DLC: EDiscordSkuType = 2;
pub const EDiscordSkuType_DiscordSkuType_Consumable: EDiscordSkuType = 3;
pub const EDiscordSkuType_DiscordSkuType_Bundle: EDiscordSkuType = 4;

pub type EDiscordInputModeType = i32;
pub const EDiscordInputModeType_DiscordInputModeType_VoiceActivity: EDiscordInputModeType = 0;
pub const EDiscordInputModeType_DiscordInputModeType_PushToTalk: EDiscordInputModeType = 1;
