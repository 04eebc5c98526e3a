use crate::models::{Setting, SettingName};

shape! {
    pub struct DeleteAccountSettingRequest {
        name: nested SettingName,
        principal_arn: text String,
    }
}

shape! {
    pub struct DeleteAccountSettingResult {
        setting: nested Setting,
    }
}

shape! {
    pub struct ListAccountSettingsRequest {
        name: nested SettingName,
        value: text String,
        principal_arn: text String,
        /// Include settings inherited from the account default.
        effective_settings: scalar bool,
        next_token: text String,
        max_results: scalar i32,
    }
}

shape! {
    pub struct ListAccountSettingsResult {
        settings: list Setting,
        next_token: text String,
    }
}

shape! {
    /// Opts a user, role or the root user in or out of an account setting.
    pub struct PutAccountSettingRequest {
        name: nested SettingName,
        /// `enabled` or `disabled`.
        value: text String,
        principal_arn: text String,
    }
}

shape! {
    pub struct PutAccountSettingResult {
        setting: nested Setting,
    }
}

shape! {
    /// Changes the account-wide default of a setting.
    pub struct PutAccountSettingDefaultRequest {
        name: nested SettingName,
        value: text String,
    }
}

shape! {
    pub struct PutAccountSettingDefaultResult {
        setting: nested Setting,
    }
}
