mod band;
mod block;
mod board;
mod event;
mod ids;
mod song;

pub use band::{Band, CreateBand, Member};
pub use block::{Block, CreateBlock};
pub use board::{Board, Card, Column};
pub use event::{CreateEvent, Event, EventKind, MonthBucket};
pub use ids::{BandId, BlockId, BoardId, CardId, ColumnId, EventId, SongId};
pub use song::{filter_songs, CreateSong, Song, SongFilter, UpdateSong};
