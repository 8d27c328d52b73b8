mod shell;
pub use shell::Shell;

mod feed;
pub use feed::Feed;

mod post_detail;
pub use post_detail::PostDetail;

mod profile;
pub use profile::Profile;
