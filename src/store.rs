//! Centralized player state container.
//!
//! The store is constructed once at startup and handed to whichever
//! component needs it (an `Arc` via `web::Data` in the HTTP layer). All
//! writes go through named setters; actions are thin orchestrations over
//! those setters. Reads hand out clones so callers never hold the lock.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};

use crate::models::{PlayerState, Song};

/// Which store field a mutation touched.
///
/// Delivered to every live subscriber after the write completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// `current_song` was replaced.
    CurrentSong,
    /// `is_playing` was set.
    Playback,
    /// `current_time` was set.
    Position,
    /// The song list was replaced wholesale.
    SongList,
    /// The lyrics text was replaced wholesale.
    Lyrics,
}

/// Opaque handle identifying a registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(StoreEvent) + Send + Sync>;

/// The player's single source of truth.
///
/// Every operation is total: setters and actions write unconditionally and
/// cannot fail. No cross-field invariant is enforced; `is_playing` may be
/// true while no song is current, exactly as the caller left it.
#[derive(Default)]
pub struct PlayerStore {
    state: RwLock<PlayerState>,
    subscribers: Mutex<Vec<(u64, Subscriber)>>,
    next_subscriber_id: AtomicU64,
}

impl PlayerStore {
    /// Create an empty store: no song, paused, empty list, empty lyrics.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- mutations -------------------------------------------------------

    /// Replace the current song.
    pub fn set_current_song(&self, song: Option<Song>) {
        self.state.write().current_song = song;
        self.notify(StoreEvent::CurrentSong);
    }

    /// Set the play/pause flag.
    pub fn set_is_playing(&self, is_playing: bool) {
        self.state.write().is_playing = is_playing;
        self.notify(StoreEvent::Playback);
    }

    /// Set the playback position in seconds.
    pub fn set_current_time(&self, time: f64) {
        self.state.write().current_time = time;
        self.notify(StoreEvent::Position);
    }

    /// Replace the song list wholesale. No merge, no dedup.
    pub fn set_song_list(&self, songs: Vec<Song>) {
        self.state.write().song_list = songs;
        self.notify(StoreEvent::SongList);
    }

    /// Replace the current lyrics text wholesale.
    pub fn set_current_lyrics(&self, lyrics: String) {
        self.state.write().current_lyrics = lyrics;
        self.notify(StoreEvent::Lyrics);
    }

    // ---- actions ---------------------------------------------------------

    /// Make `song` current, rewind to the start, and mark playback active.
    pub fn play_song(&self, song: Song) {
        tracing::debug!(song_id = song.id, title = %song.title, "play song");
        self.set_current_song(Some(song));
        self.set_current_time(0.0);
        self.set_is_playing(true);
    }

    /// Mark playback paused. The current song and position are untouched.
    pub fn pause_song(&self) {
        tracing::debug!("pause");
        self.set_is_playing(false);
    }

    /// Replace the song list with `songs`.
    pub fn load_songs(&self, songs: Vec<Song>) {
        tracing::debug!(count = songs.len(), "load songs");
        self.set_song_list(songs);
    }

    /// Replace the current lyrics text with `lyrics`.
    pub fn update_lyrics(&self, lyrics: String) {
        self.set_current_lyrics(lyrics);
    }

    /// Move the playback position to `time` seconds.
    pub fn seek(&self, time: f64) {
        self.set_current_time(time);
    }

    // ---- getters ---------------------------------------------------------

    pub fn current_song(&self) -> Option<Song> {
        self.state.read().current_song.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing
    }

    pub fn current_time(&self) -> f64 {
        self.state.read().current_time
    }

    pub fn song_list(&self) -> Vec<Song> {
        self.state.read().song_list.clone()
    }

    pub fn current_lyrics(&self) -> String {
        self.state.read().current_lyrics.clone()
    }

    /// Clone the full state for serialization.
    pub fn snapshot(&self) -> PlayerState {
        self.state.read().clone()
    }

    // ---- subscriptions ---------------------------------------------------

    /// Register `callback` to run synchronously after every mutation.
    ///
    /// Callbacks execute on the mutating thread, outside the state lock, so
    /// they may read the store but must not block for long.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(StoreEvent) + Send + Sync + 'static,
    {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.lock().push((id, Box::new(callback)));
        SubscriptionId(id)
    }

    /// Remove a subscriber. Returns false if the id was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id.0);
        subscribers.len() != before
    }

    fn notify(&self, event: StoreEvent) {
        for (_, callback) in self.subscribers.lock().iter() {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    fn song(id: u64, title: &str) -> Song {
        Song {
            id,
            title: title.to_string(),
            artist: "Artist".to_string(),
            album: "Album".to_string(),
            duration: 180,
            file: format!("music/{id}.mp3"),
        }
    }

    #[test]
    fn test_play_song_sets_current_and_playing() {
        let store = PlayerStore::new();
        let s = song(1, "First");

        store.play_song(s.clone());

        assert_eq!(store.current_song(), Some(s));
        assert!(store.is_playing());
        assert_eq!(store.current_time(), 0.0);
    }

    #[test]
    fn test_play_song_rewinds_position() {
        let store = PlayerStore::new();
        store.play_song(song(1, "First"));
        store.seek(42.5);
        assert_eq!(store.current_time(), 42.5);

        store.play_song(song(2, "Second"));
        assert_eq!(store.current_time(), 0.0);
    }

    #[test]
    fn test_pause_song_always_clears_playing() {
        let store = PlayerStore::new();

        // Pausing with nothing playing is a no-op write, not an error.
        store.pause_song();
        assert!(!store.is_playing());

        store.play_song(song(1, "First"));
        store.pause_song();
        assert!(!store.is_playing());
        // Song and position survive the pause.
        assert!(store.current_song().is_some());
    }

    #[test]
    fn test_load_songs_replaces_wholesale() {
        let store = PlayerStore::new();
        store.load_songs(vec![song(1, "A"), song(2, "B")]);

        let replacement = vec![song(3, "C")];
        store.load_songs(replacement.clone());

        assert_eq!(store.song_list(), replacement);
    }

    #[test]
    fn test_load_songs_empty_clears_list() {
        let store = PlayerStore::new();
        store.load_songs(vec![song(1, "A")]);
        store.load_songs(Vec::new());
        assert!(store.song_list().is_empty());
    }

    #[test]
    fn test_update_lyrics_replaces_wholesale() {
        let store = PlayerStore::new();
        store.update_lyrics("old text".to_string());
        store.update_lyrics("new text".to_string());
        assert_eq!(store.current_lyrics(), "new text");
    }

    #[test]
    fn test_snapshot_reflects_all_fields() {
        let store = PlayerStore::new();
        let s = song(7, "Seven");
        store.load_songs(vec![s.clone()]);
        store.play_song(s.clone());
        store.update_lyrics("la la la".to_string());

        let state = store.snapshot();
        assert_eq!(state.current_song, Some(s.clone()));
        assert!(state.is_playing);
        assert_eq!(state.song_list, vec![s]);
        assert_eq!(state.current_lyrics, "la la la");
    }

    #[test]
    fn test_subscriber_sees_one_event_per_mutation() {
        let store = PlayerStore::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let seen = events.clone();
        store.subscribe(move |event| seen.lock().push(event));

        // play_song is three mutations: song, position, playback.
        store.play_song(song(1, "First"));
        store.pause_song();

        let events = events.lock();
        assert_eq!(
            *events,
            vec![
                StoreEvent::CurrentSong,
                StoreEvent::Position,
                StoreEvent::Playback,
                StoreEvent::Playback,
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let store = PlayerStore::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let id = store.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        store.pause_song();
        assert!(store.unsubscribe(id));
        store.pause_song();

        assert_eq!(count.load(Ordering::SeqCst), 1);
        // Second unsubscribe of the same id reports nothing removed.
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn test_subscriber_may_read_store() {
        let store = Arc::new(PlayerStore::new());
        let observed = Arc::new(Mutex::new(None));

        let store_ref = store.clone();
        let slot = observed.clone();
        store.subscribe(move |event| {
            if event == StoreEvent::Lyrics {
                *slot.lock() = Some(store_ref.current_lyrics());
            }
        });

        store.update_lyrics("hello".to_string());
        assert_eq!(observed.lock().as_deref(), Some("hello"));
    }
}
