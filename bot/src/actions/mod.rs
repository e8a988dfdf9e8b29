//! ユーザーアクション
//!
//! シミュレーターが毎イテレーション実行するHTTPアクション群。
//! 失敗はここで握りつぶし、呼び出し側には `None` だけを返す。

mod user;

pub use user::UserActions;
