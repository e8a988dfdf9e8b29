//! 合成データ生成
//!
//! リクエストペイロード用のもっともらしいユーザー名・メールアドレスと、
//! ネガティブパス検証用のランダムUUID文字列を生成する。
//! 呼び出しごとに独立で、再現性（シード）の契約は持たない。

use fake::faker::internet::en::{FreeEmail, Username};
use fake::Fake;
use traffic_bot_common::protocol::UserCreateRequest;
use uuid::Uuid;

/// ランダムなユーザー名を生成する
pub fn username() -> String {
    Username().fake()
}

/// ランダムなメールアドレスを生成する
pub fn email() -> String {
    FreeEmail().fake()
}

/// UUID形式のランダムなユーザーIDを生成する
///
/// ダウンストリームに存在しないIDとして「取得ミス」シナリオに使う。
pub fn user_id() -> String {
    Uuid::new_v4().to_string()
}

/// ユーザー作成リクエストを丸ごと生成する
pub fn user_create_request() -> UserCreateRequest {
    UserCreateRequest {
        username: username(),
        email: email(),
    }
}
