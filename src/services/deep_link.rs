use serde::Serialize;
use std::collections::BTreeSet;

use crate::models::Content;

/// Resolved launch destination for a piece of content
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LaunchTarget {
    pub platform_id: String,
    pub url: String,
}

/// Picks the launch URL for a piece of content.
///
/// Connected platforms are tried first; when none of them carry a link the
/// first available platform with one is used. URL templates themselves come
/// from the catalog provider, not from here.
pub fn resolve(content: &Content, connected: &BTreeSet<String>) -> Option<LaunchTarget> {
    for platform_id in connected {
        if let Some(url) = content.deep_link_for(platform_id) {
            return Some(LaunchTarget {
                platform_id: platform_id.clone(),
                url: url.to_string(),
            });
        }
    }

    content.platforms.iter().find_map(|(platform_id, avail)| {
        if !avail.available {
            return None;
        }
        avail.deep_link.as_ref().map(|url| LaunchTarget {
            platform_id: platform_id.clone(),
            url: url.clone(),
        })
    })
}
