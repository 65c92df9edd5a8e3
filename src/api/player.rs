//! Player API endpoints.
//!
//! The HTTP surface a view uses to read and drive the [`PlayerStore`]. Every
//! store operation is total, so these handlers only fail on malformed input
//! or unknown song ids.

use actix_web::{get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Lyrics, Song};
use crate::store::PlayerStore;

/// Request body for replacing the current lyrics text.
#[derive(Debug, Serialize, Deserialize)]
pub struct LyricsBody {
    pub lyrics: String,
}

/// Request body for moving the playback position.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeekBody {
    /// Target position in seconds.
    pub time: f64,
}

/// Response for a song list replacement.
#[derive(Debug, Serialize)]
pub struct LoadedResponse {
    /// Number of songs now in the list.
    pub count: usize,
}

/// Full player state snapshot.
///
/// GET /api/player/state
#[get("/api/player/state")]
pub async fn get_state(store: web::Data<PlayerStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.snapshot())
}

/// Start playing a song.
///
/// POST /api/player/play
///
/// Makes the song current, rewinds to the start, and marks playback active.
/// Returns the resulting snapshot.
#[post("/api/player/play")]
pub async fn play(store: web::Data<PlayerStore>, song: web::Json<Song>) -> HttpResponse {
    store.play_song(song.into_inner());
    HttpResponse::Ok().json(store.snapshot())
}

/// Pause playback.
///
/// POST /api/player/pause
#[post("/api/player/pause")]
pub async fn pause(store: web::Data<PlayerStore>) -> HttpResponse {
    store.pause_song();
    HttpResponse::Ok().json(store.snapshot())
}

/// Move the playback position.
///
/// POST /api/player/seek
#[post("/api/player/seek")]
pub async fn seek(store: web::Data<PlayerStore>, body: web::Json<SeekBody>) -> HttpResponse {
    store.seek(body.time);
    HttpResponse::Ok().json(store.snapshot())
}

/// Current song list.
///
/// GET /api/player/songs
#[get("/api/player/songs")]
pub async fn list_songs(store: web::Data<PlayerStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.song_list())
}

/// Replace the song list wholesale.
///
/// PUT /api/player/songs
#[put("/api/player/songs")]
pub async fn load_songs(
    store: web::Data<PlayerStore>,
    songs: web::Json<Vec<Song>>,
) -> HttpResponse {
    let songs = songs.into_inner();
    let count = songs.len();
    store.load_songs(songs);
    HttpResponse::Ok().json(LoadedResponse { count })
}

/// Look up one song from the current list by id.
///
/// GET /api/player/songs/{id}
#[get("/api/player/songs/{id}")]
pub async fn get_song(
    store: web::Data<PlayerStore>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let song = store
        .song_list()
        .into_iter()
        .find(|song| song.id == id)
        .ok_or_else(|| AppError::song_not_found(id))?;

    Ok(HttpResponse::Ok().json(song))
}

/// Current lyrics text.
///
/// GET /api/player/lyrics
#[get("/api/player/lyrics")]
pub async fn get_lyrics(store: web::Data<PlayerStore>) -> HttpResponse {
    HttpResponse::Ok().json(LyricsBody {
        lyrics: store.current_lyrics(),
    })
}

/// Current lyrics parsed as time-aligned LRC lines.
///
/// GET /api/player/lyrics/lines
///
/// The `song_id` is taken from the current song, or 0 when nothing is
/// current; the association is by convention only.
#[get("/api/player/lyrics/lines")]
pub async fn get_lyric_lines(store: web::Data<PlayerStore>) -> HttpResponse {
    let song_id = store.current_song().map(|song| song.id).unwrap_or_default();
    HttpResponse::Ok().json(Lyrics::from_lrc(song_id, &store.current_lyrics()))
}

/// Replace the lyrics text wholesale.
///
/// PUT /api/player/lyrics
#[put("/api/player/lyrics")]
pub async fn update_lyrics(
    store: web::Data<PlayerStore>,
    body: web::Json<LyricsBody>,
) -> HttpResponse {
    store.update_lyrics(body.into_inner().lyrics);
    HttpResponse::Ok().json(LyricsBody {
        lyrics: store.current_lyrics(),
    })
}

/// Configure player routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_state)
        .service(play)
        .service(pause)
        .service(seek)
        .service(list_songs)
        .service(load_songs)
        .service(get_song)
        .service(get_lyrics)
        .service(get_lyric_lines)
        .service(update_lyrics);
}
