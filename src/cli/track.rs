use crate::{Res, info, spotify, success, types::Token};

/// Prints the currently playing track.
pub async fn get_current_track(token: Token) -> Res<()> {
    let track = spotify::tracks::get_current_track(&token).await?;
    info!("Currently playing: \"{}\"", track.name);
    Ok(())
}

/// Likes the currently playing track.
pub async fn like_current_track(token: Token) -> Res<()> {
    let track = spotify::tracks::get_current_track(&token).await?;
    spotify::tracks::like_track(&token, &track.id).await?;
    success!("Liked \"{}\"!", track.name);
    Ok(())
}

/// Reports whether the currently playing track is in the liked tracks.
pub async fn is_current_track_liked(token: Token) -> Res<()> {
    let track = spotify::tracks::get_current_track(&token).await?;
    if spotify::tracks::is_track_liked(&token, &track.id).await? {
        success!("\"{}\" is in your liked tracks.", track.name);
    } else {
        info!("\"{}\" is not in your liked tracks.", track.name);
    }
    Ok(())
}
