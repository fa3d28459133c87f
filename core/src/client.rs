//! Top-level entry point of the SDK.
//!
//! # Design
//! `TwitchSdk` owns the configuration state and the one `Transport` every
//! resource client borrows. Calls that need application credentials
//! (`auth_*`, token exchange, login URL, `status` with a token) check the
//! state first and fail with `MissingConfiguration` before any I/O. Plain
//! reads work in either state.

use serde_json::Value;

use crate::config::{ConfigState, Credentials, SdkConfig, TransportConfig};
use crate::error::{Result, SdkError};
use crate::http::{Envelope, HttpMethod};
use crate::query::{join_list, Query};
use crate::resources::{
    Auth, Blocks, Channels, Chat, Follows, Games, Search, Streams, Subscriptions, Teams, Users,
    Videos,
};
use crate::transport::Transport;
use crate::types::{
    AccessToken, ChannelFollowsOptions, ChannelUpdate, ChannelVideosOptions, Direction, Page,
    StreamsFilter, TopVideosOptions, UserFollowsOptions,
};

const DEFAULT_SUBSCRIPTIONS_LIMIT: u32 = 25;
const DEFAULT_FOLLOWED_LIMIT: u32 = 25;

/// Blocking client for the Twitch Kraken API.
#[derive(Debug)]
pub struct TwitchSdk {
    state: ConfigState,
    transport: Transport,
}

impl Default for TwitchSdk {
    fn default() -> Self {
        Self::unconfigured(TransportConfig::default())
    }
}

impl TwitchSdk {
    /// Build an SDK from loose configuration.
    ///
    /// No credential fields at all gives an unconfigured SDK; a partial or
    /// empty set is a `ConfigValidation` error.
    pub fn new(config: SdkConfig) -> Result<Self> {
        let state = config.state()?;
        let mut sdk = Self::unconfigured(config.transport);
        if let ConfigState::Configured(creds) = state {
            sdk.set_credentials(creds);
        }
        Ok(sdk)
    }

    pub fn unconfigured(transport: TransportConfig) -> Self {
        Self {
            state: ConfigState::Unconfigured,
            transport: Transport::new(transport),
        }
    }

    /// Install validated credentials, replacing any previous ones.
    pub fn set_credentials(&mut self, credentials: Credentials) -> &mut Self {
        self.transport
            .set_client_id(Some(credentials.client_id().to_string()));
        self.state = ConfigState::Configured(credentials);
        self
    }

    /// Validate the credential fields of `config` and install them.
    ///
    /// On failure the current state is kept.
    pub fn set_config(&mut self, config: &SdkConfig) -> Result<&mut Self> {
        match config.state()? {
            ConfigState::Configured(creds) => Ok(self.set_credentials(creds)),
            ConfigState::Unconfigured => Err(SdkError::ConfigValidation(
                "client_id, client_secret and redirect_uri are required".to_string(),
            )),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.state.is_configured()
    }

    pub fn config_state(&self) -> &ConfigState {
        &self.state
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Status and headers of the most recent call.
    pub fn last_response(&self) -> Option<Envelope> {
        self.transport.last_response()
    }

    pub fn api_version(&self) -> u32 {
        self.transport.api_version()
    }

    /// See `Transport::set_api_version`; invalid input is ignored.
    pub fn set_api_version<V: ToString>(&mut self, version: V) {
        self.transport.set_api_version(version);
    }

    fn credentials(&self) -> Result<&Credentials> {
        self.state.credentials()
    }

    /// `oauth_token` + `client_id`, the query every authenticated call carries.
    fn auth_query(&self, token: &str) -> Result<Option<String>> {
        let creds = self.credentials()?;
        Ok(Query::new()
            .param("oauth_token", token)
            .param("client_id", creds.client_id())
            .build())
    }

    // -----------------------------------------------------------------------
    // Root
    // -----------------------------------------------------------------------

    /// API root: links and, with a token, its authorization status.
    pub fn status(&self, token: Option<&str>) -> Result<Value> {
        let query = match token {
            Some(token) => {
                self.credentials()?;
                Query::new().param("oauth_token", token).build()
            }
            None => None,
        };
        self.transport
            .request(query.as_deref().unwrap_or(""), HttpMethod::Get, None)
    }

    // -----------------------------------------------------------------------
    // Users and follows
    // -----------------------------------------------------------------------

    pub fn user_get(&self, username: &str) -> Result<Value> {
        Users::new(&self.transport).user(username)
    }

    pub fn user_follow_channels(&self, user: &str, options: &UserFollowsOptions) -> Result<Value> {
        let query = Query::new()
            .param("limit", options.page.limit)
            .param("offset", options.page.offset)
            .param("direction", options.direction.map(Direction::as_str))
            .param("sortby", options.sort_by.map(|s| s.as_str()))
            .build();
        Follows::new(&self.transport).user_follows(user, query.as_deref())
    }

    pub fn user_follow_relationship(&self, user: &str, channel: &str) -> Result<Value> {
        Follows::new(&self.transport).relationship(user, channel)
    }

    /// Requires scope `user_follows_edit`.
    pub fn auth_user_follow_channel(
        &self,
        user: &str,
        channel: &str,
        token: &str,
        notifications: bool,
    ) -> Result<Value> {
        self.credentials()?;
        let query = Query::new()
            .param("oauth_token", token)
            .param("notifications", notifications)
            .build();
        Follows::new(&self.transport).follow(user, channel, query.as_deref())
    }

    /// Requires scope `user_follows_edit`.
    pub fn auth_user_unfollow_channel(&self, user: &str, channel: &str, token: &str) -> Result<Value> {
        self.credentials()?;
        let query = Query::new().param("oauth_token", token).build();
        Follows::new(&self.transport).unfollow(user, channel, query.as_deref())
    }

    pub fn channel_follows(&self, channel: &str, options: &ChannelFollowsOptions) -> Result<Value> {
        let query = Query::new()
            .param("limit", options.page.limit)
            .param("offset", options.page.offset)
            .param("cursor", options.cursor.as_deref())
            .param("direction", options.direction.map(Direction::as_str))
            .build();
        Follows::new(&self.transport).channel_follows(channel, query.as_deref())
    }

    // -----------------------------------------------------------------------
    // Channels
    // -----------------------------------------------------------------------

    pub fn channel_get(&self, channel: &str) -> Result<Value> {
        Channels::new(&self.transport).channel(channel)
    }

    pub fn channel_teams_get(&self, channel: &str) -> Result<Value> {
        Channels::new(&self.transport).teams(channel)
    }

    pub fn channel_search(&self, query: &str, page: Page) -> Result<Value> {
        let query = Query::new()
            .param("query", query)
            .param("limit", page.limit)
            .param("offset", page.offset)
            .build();
        Search::new(&self.transport).channels(query.as_deref())
    }

    // -----------------------------------------------------------------------
    // Teams
    // -----------------------------------------------------------------------

    pub fn team_get(&self, team: &str) -> Result<Value> {
        Teams::new(&self.transport).team(team)
    }

    pub fn team_list(&self, page: Page) -> Result<Value> {
        let query = Query::new()
            .param("limit", page.limit)
            .param("offset", page.offset)
            .build();
        Teams::new(&self.transport).teams(query.as_deref())
    }

    /// The `channels` array of the legacy team listing, `null` if absent.
    pub fn team_members_all(&self, team: &str) -> Result<Value> {
        let mut listing = Teams::new(&self.transport).all_channels(team)?;
        Ok(listing
            .get_mut("channels")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }

    // -----------------------------------------------------------------------
    // Streams
    // -----------------------------------------------------------------------

    pub fn stream_get(&self, channel: &str) -> Result<Value> {
        Streams::new(&self.transport).stream(channel)
    }

    pub fn stream_search(&self, query: &str, page: Page, hls: Option<bool>) -> Result<Value> {
        let query = Query::new()
            .param("query", query)
            .param("limit", page.limit)
            .param("offset", page.offset)
            .param("hls", hls)
            .build();
        Search::new(&self.transport).streams(query.as_deref())
    }

    pub fn streams_summarize<S: AsRef<str>>(
        &self,
        game: Option<&str>,
        channels: &[S],
        hls: Option<bool>,
    ) -> Result<Value> {
        let query = Query::new()
            .param("game", game)
            .param("channel", join_list(channels))
            .param("hls", hls)
            .build();
        Streams::new(&self.transport).summary(query.as_deref())
    }

    pub fn streams_featured(&self, page: Page, hls: Option<bool>) -> Result<Value> {
        let query = Query::new()
            .param("limit", page.limit)
            .param("offset", page.offset)
            .param("hls", hls)
            .build();
        Streams::new(&self.transport).featured(query.as_deref())
    }

    /// Live streams matching `filter`.
    pub fn get_streams(&self, filter: &StreamsFilter) -> Result<Value> {
        let query = Query::new()
            .param("game", filter.game.as_deref())
            .param("channel", join_list(filter.channels.as_slice()))
            .param("limit", filter.page.limit)
            .param("offset", filter.page.offset)
            .param("embeddable", filter.embeddable)
            .param("hls", filter.hls)
            .build();
        Streams::new(&self.transport).streams(query.as_deref())
    }

    pub fn streams_by_channels<S: AsRef<str>>(&self, channels: &[S], page: Page) -> Result<Value> {
        self.get_streams(&StreamsFilter {
            channels: channels.iter().map(|c| c.as_ref().to_string()).collect(),
            page,
            ..StreamsFilter::default()
        })
    }

    pub fn streams_by_game(&self, game: &str, page: Page) -> Result<Value> {
        self.get_streams(&StreamsFilter {
            game: Some(game.to_string()),
            page,
            ..StreamsFilter::default()
        })
    }

    // -----------------------------------------------------------------------
    // Videos
    // -----------------------------------------------------------------------

    pub fn video_get(&self, id: &str) -> Result<Value> {
        Videos::new(&self.transport).video(id)
    }

    pub fn videos_top(&self, options: &TopVideosOptions) -> Result<Value> {
        let query = Query::new()
            .param("limit", options.page.limit)
            .param("offset", options.page.offset)
            .param("game", options.game.as_deref())
            .param("period", options.period.map(|p| p.as_str()))
            .build();
        Videos::new(&self.transport).top(query.as_deref())
    }

    pub fn videos_by_channel(&self, channel: &str, options: &ChannelVideosOptions) -> Result<Value> {
        let query = Query::new()
            .param("limit", options.page.limit)
            .param("offset", options.page.offset)
            .param("broadcasts", options.broadcasts)
            .param("hls", options.hls)
            .build();
        Videos::new(&self.transport).channel_videos(channel, query.as_deref())
    }

    // -----------------------------------------------------------------------
    // Chat
    // -----------------------------------------------------------------------

    pub fn chat_get(&self, channel: &str) -> Result<Value> {
        Chat::new(&self.transport).chat(channel)
    }

    pub fn chat_emoticons(&self) -> Result<Value> {
        Chat::new(&self.transport).emoticons()
    }

    /// Emoticon images, optionally limited to comma-separated `emotesets`.
    pub fn chat_emoticons_images(&self, emotesets: Option<&str>) -> Result<Value> {
        let query = Query::new().param("emotesets", emotesets).build();
        Chat::new(&self.transport).emoticon_images(query.as_deref())
    }

    pub fn chat_badges(&self, channel: &str) -> Result<Value> {
        Chat::new(&self.transport).badges(channel)
    }

    // -----------------------------------------------------------------------
    // Games
    // -----------------------------------------------------------------------

    pub fn games_top(&self, page: Page) -> Result<Value> {
        let query = Query::new()
            .param("limit", page.limit)
            .param("offset", page.offset)
            .build();
        Games::new(&self.transport).top(query.as_deref())
    }

    /// `kind` is the Kraken `type` parameter, e.g. `suggest`.
    pub fn game_search(&self, query: &str, kind: Option<&str>, live: Option<bool>) -> Result<Value> {
        let query = Query::new()
            .param("query", query)
            .param("type", kind)
            .param("live", live)
            .build();
        Search::new(&self.transport).games(query.as_deref())
    }

    // -----------------------------------------------------------------------
    // OAuth
    // -----------------------------------------------------------------------

    /// URL to send the user to; `scope` is a space-separated list.
    pub fn auth_login_url(&self, scope: &str) -> Result<String> {
        let creds = self.credentials()?;
        let query = Query::new()
            .param("response_type", "code")
            .param("client_id", creds.client_id())
            .param("redirect_uri", creds.redirect_uri())
            .param("scope", scope)
            .build();
        Ok(Auth::new(&self.transport).login_url(query.as_deref()))
    }

    /// Exchange the code returned after authorization for a token.
    pub fn auth_access_token_get(&self, code: &str) -> Result<Value> {
        let creds = self.credentials()?;
        let form = Query::new()
            .param("client_id", creds.client_id())
            .param("client_secret", creds.client_secret())
            .param("grant_type", "authorization_code")
            .param("redirect_uri", creds.redirect_uri())
            .param("code", code)
            .build();
        Auth::new(&self.transport).access_token(form.as_deref())
    }

    /// Typed form of `auth_access_token_get`.
    pub fn auth_access_token(&self, code: &str) -> Result<AccessToken> {
        let body = self.auth_access_token_get(code)?;
        serde_json::from_value(body).map_err(SdkError::decode)
    }

    // -----------------------------------------------------------------------
    // Authenticated user
    // -----------------------------------------------------------------------

    /// Requires scope `user_read`.
    pub fn auth_user_get(&self, token: &str) -> Result<Value> {
        let query = self.auth_query(token)?;
        Users::new(&self.transport).user_auth(query.as_deref())
    }

    /// Requires scope `user_blocks_read`.
    pub fn auth_user_blocks(&self, token: &str, user: &str, page: Page) -> Result<Value> {
        let creds = self.credentials()?;
        let query = Query::new()
            .param("oauth_token", token)
            .param("client_id", creds.client_id())
            .param("limit", page.limit)
            .param("offset", page.offset)
            .build();
        Blocks::new(&self.transport).list(user, query.as_deref())
    }

    /// Adds `target` to `user`'s block list. Requires scope `user_blocks_edit`.
    pub fn auth_block_target(&self, token: &str, user: &str, target: &str) -> Result<Value> {
        let query = self.auth_query(token)?;
        Blocks::new(&self.transport).block(user, target, query.as_deref())
    }

    /// Removes `target` from `user`'s block list. Requires scope `user_blocks_edit`.
    pub fn auth_remove_target(&self, token: &str, user: &str, target: &str) -> Result<Value> {
        let query = self.auth_query(token)?;
        Blocks::new(&self.transport).unblock(user, target, query.as_deref())
    }

    /// Requires scope `user_read`.
    pub fn auth_streams_followed(&self, token: &str, page: Page, hls: Option<bool>) -> Result<Value> {
        let creds = self.credentials()?;
        let query = Query::new()
            .param("oauth_token", token)
            .param("client_id", creds.client_id())
            .param("limit", page.limit.unwrap_or(DEFAULT_FOLLOWED_LIMIT))
            .param("offset", page.offset)
            .param("hls", hls)
            .build();
        Users::new(&self.transport).followed_streams(query.as_deref())
    }

    /// Requires scope `user_read`.
    pub fn auth_videos_followed(&self, token: &str, page: Page) -> Result<Value> {
        let creds = self.credentials()?;
        let query = Query::new()
            .param("oauth_token", token)
            .param("client_id", creds.client_id())
            .param("limit", page.limit)
            .param("offset", page.offset)
            .build();
        Users::new(&self.transport).followed_videos(query.as_deref())
    }

    // -----------------------------------------------------------------------
    // Authenticated channel
    // -----------------------------------------------------------------------

    /// Requires scope `channel_read`.
    pub fn auth_channel_get(&self, token: &str) -> Result<Value> {
        let query = self.auth_query(token)?;
        Channels::new(&self.transport).channel_auth(query.as_deref())
    }

    /// Update status, game or delay. Requires scope `channel_editor`.
    pub fn auth_channel_set(&self, token: &str, channel: &str, update: &ChannelUpdate) -> Result<Value> {
        let query = self.auth_query(token)?;
        let data = Query::new()
            .param("channel[status]", update.status.as_deref())
            .param("channel[game]", update.game.as_deref())
            .param("channel[delay]", update.delay)
            .build();
        Channels::new(&self.transport).update(channel, query.as_deref(), data.as_deref())
    }

    /// Requires scope `channel_stream`.
    pub fn auth_channel_reset_key(&self, token: &str, channel: &str) -> Result<Value> {
        let query = self.auth_query(token)?;
        Channels::new(&self.transport).reset_stream_key(channel, query.as_deref())
    }

    /// Requires scope `channel_read`.
    pub fn auth_channel_editors(&self, token: &str, channel: &str) -> Result<Value> {
        let query = self.auth_query(token)?;
        Channels::new(&self.transport).editors(channel, query.as_deref())
    }

    // -----------------------------------------------------------------------
    // Subscriptions
    // -----------------------------------------------------------------------

    /// Subscribers of `channel`, newest first unless `direction` says otherwise.
    /// Requires scope `channel_subscriptions`.
    pub fn auth_channel_subscriptions(
        &self,
        token: &str,
        channel: &str,
        page: Page,
        direction: Option<Direction>,
    ) -> Result<Value> {
        let creds = self.credentials()?;
        let query = Query::new()
            .param("oauth_token", token)
            .param("client_id", creds.client_id())
            .param("direction", direction.unwrap_or(Direction::Desc).as_str())
            .param("limit", page.limit.unwrap_or(DEFAULT_SUBSCRIPTIONS_LIMIT))
            .param("offset", page.offset)
            .build();
        Subscriptions::new(&self.transport).channel_subscriptions(channel, query.as_deref())
    }

    /// Requires scope `channel_check_subscription`.
    pub fn auth_subscribed_user(&self, token: &str, channel: &str, user: &str) -> Result<Value> {
        let query = self.auth_query(token)?;
        Subscriptions::new(&self.transport).channel_subscriber(channel, user, query.as_deref())
    }

    /// Requires scope `user_subscriptions`.
    pub fn auth_subscribed_to_channel(&self, token: &str, user: &str, channel: &str) -> Result<Value> {
        let query = self.auth_query(token)?;
        Subscriptions::new(&self.transport).user_subscription(user, channel, query.as_deref())
    }
}
