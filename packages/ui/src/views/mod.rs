mod app_shell;
pub use app_shell::AppShell;

mod feed;
pub use feed::FeedView;

mod post_detail;
pub use post_detail::PostDetailView;

mod profile;
pub use profile::ProfileView;
