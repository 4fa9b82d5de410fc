//! Profile entity returned by the profile lookup provider.

/// Public summary of a social profile.
///
/// Counters are unsigned: the provider never reports negative follower,
/// followee or media counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub full_name: String,
    pub biography: String,
    pub profile_pic_url: String,
    pub is_private: bool,
    pub is_verified: bool,
    pub followers: u64,
    pub followees: u64,
    pub media_count: u64,
    pub user_id: u64,
}
