use reqwest::StatusCode;
use serde_json::json;

use crate::{
    Res, config,
    error::Error,
    spotify::http_client,
    types::{CurrentlyPlaying, ErrorResponse, Token, Track},
};

/// Fetches the currently playing track.
///
/// A 204 response, a missing item, an empty track id, or `is_playing=false`
/// all mean the player is idle and surface as [`Error::NoTrackPlaying`],
/// never as a successful empty track.
pub async fn get_current_track(token: &Token) -> Res<Track> {
    let url = format!("{}/me/player/currently-playing", config::spotify_apiurl());
    let res = http_client()
        .get(&url)
        .bearer_auth(&token.access_token)
        .send()
        .await
        .map_err(|e| Error::ApiRequestFailed(format!("failed to fetch current track: {e}")))?;

    if res.status() == StatusCode::NO_CONTENT {
        return Err(Error::NoTrackPlaying);
    }
    if !res.status().is_success() {
        return Err(api_error(res).await);
    }

    let playing: CurrentlyPlaying = res
        .json()
        .await
        .map_err(|e| Error::ApiRequestFailed(format!("malformed current track response: {e}")))?;

    match playing.item {
        Some(track) if playing.is_playing && !track.id.is_empty() => Ok(track),
        _ => Err(Error::NoTrackPlaying),
    }
}

/// Saves (likes) a track in the user's library.
pub async fn like_track(token: &Token, track_id: &str) -> Res<()> {
    let url = format!("{}/me/tracks", config::spotify_apiurl());
    let res = http_client()
        .put(&url)
        .bearer_auth(&token.access_token)
        .json(&json!({ "ids": [track_id] }))
        .send()
        .await
        .map_err(|e| Error::ApiRequestFailed(format!("failed to save track: {e}")))?;

    if res.status() != StatusCode::OK {
        return Err(api_error(res).await);
    }
    Ok(())
}

/// Checks whether a track is in the user's liked tracks.
///
/// The contains endpoint answers with a boolean sequence, one element per
/// requested id; an empty sequence is a failure, not "not liked".
pub async fn is_track_liked(token: &Token, track_id: &str) -> Res<bool> {
    let url = format!("{}/me/tracks/contains", config::spotify_apiurl());
    let res = http_client()
        .get(&url)
        .query(&[("ids", track_id)])
        .bearer_auth(&token.access_token)
        .send()
        .await
        .map_err(|e| Error::ApiRequestFailed(format!("failed to check saved tracks: {e}")))?;

    if !res.status().is_success() {
        return Err(api_error(res).await);
    }

    let contained: Vec<bool> = res
        .json()
        .await
        .map_err(|e| Error::ApiRequestFailed(format!("malformed saved tracks response: {e}")))?;

    match contained.first() {
        Some(liked) => Ok(*liked),
        None => Err(Error::ApiRequestFailed(String::from(
            "saved tracks endpoint returned no results",
        ))),
    }
}

/// Builds an [`Error::ApiRequestFailed`] from a non-success response,
/// surfacing the provider's error message and status when the body carries
/// one and the raw status code otherwise.
async fn api_error(res: reqwest::Response) -> Error {
    let status = res.status();
    if let Ok(body) = res.json::<ErrorResponse>().await {
        if let Some(err) = body.error {
            if !err.message.is_empty() {
                return Error::ApiRequestFailed(format!(
                    "{} (status: {})",
                    err.message, err.status
                ));
            }
        }
    }
    Error::ApiRequestFailed(format!("status code {}", status.as_u16()))
}
