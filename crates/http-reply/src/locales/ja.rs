//! Japanese locale.

use std::sync::LazyLock;

use crate::record::StatusRecord;
use crate::status_map::StatusMap;

/// Japanese message per status code, covering the full canonical table.
pub const MESSAGES: &[(u16, &str)] = &[
    // 2xx Success
    (200, "リクエストは成功した。"),
    (201, "リクエストは完了し、新しいリソースが作成された。"),
    (202, "リクエストは処理のために受理された。"),
    (204, "サーバーはリクエストを正常に処理したが、返すコンテンツはない。"),
    (206, "クライアントが送信した Range ヘッダーにより、サーバーはリソースの一部のみを配信している。"),
    // 3xx Redirection
    (301, "リクエストされたリソースは恒久的に移動された。"),
    (302, "リクエストされたリソースは一時的に別の URI に存在する。"),
    (304, "リソースは前回のリクエスト以降変更されていない。"),
    (307, "リクエストは別の URI で再送されるべきだが、今後のリクエストは元の URI を使用すべきである。"),
    (308, "リクエストおよび今後のすべてのリクエストは別の URI で再送されるべきである。"),
    // 4xx Client Error
    (400, "クライアントエラーのため、サーバーはリクエストを処理できない。"),
    (401, "認証が必要であり、認証に失敗したか提供されていない。"),
    (403, "サーバーはリクエストを理解したが、承認を拒否した。"),
    (404, "リクエストされたリソースは見つからなかった。"),
    (405, "このリソースではそのリクエストメソッドは許可されていない。"),
    (406, "リクエストされたリソースは、Accept ヘッダーで許容されないコンテンツしか生成できない。"),
    (408, "サーバーはリクエストの待機中にタイムアウトした。"),
    (409, "リクエストはリソースの現在の状態と競合している。"),
    (410, "リクエストされたリソースはもう利用できない。"),
    (411, "リクエストは、リソースが要求するコンテンツの長さを指定しなかった。"),
    (412, "サーバーは、リクエスト元がリクエストに課した前提条件の一つを満たしていない。"),
    (413, "リクエストは、サーバーが処理できる、または処理しようとする大きさを超えている。"),
    (414, "指定された URI は長すぎてサーバーが処理できない。"),
    (415, "リクエストのエンティティは、サーバーまたはリソースが対応していないメディアタイプである。"),
    (416, "クライアントはファイルの一部を要求したが、サーバーはその部分を提供できない。"),
    (417, "サーバーは Expect リクエストヘッダーの要件を満たせない。"),
    (418, "ティーポットでコーヒーを淹れようとする試みには、エラーコード 418 I'm a teapot が返されるべきである。"),
    (422, "リクエストは整形されていたが、意味的なエラーを含んでいる。"),
    (426, "クライアントは、Upgrade ヘッダーで示された TLS/1.0 などの別のプロトコルに切り替えるべきである。"),
    (428, "オリジンサーバーはリクエストが条件付きであることを要求している。"),
    (429, "ユーザーは一定時間内に送信できる数を超えるリクエストを送信した。"),
    (431, "個々のヘッダーフィールド、またはすべてのヘッダーフィールドの合計が大きすぎるため、サーバーはリクエストの処理を拒否している。"),
    (451, "サーバー運用者は、リクエストされたリソースを含むリソースへのアクセスを拒否するよう法的要求を受けている。"),
    // 5xx Server Error
    (500, "サーバーは予期しない状態に遭遇した。"),
    (501, "サーバーは要求された機能をサポートしていない。"),
    (502, "サーバーはアップストリームサーバーから無効な応答を受け取った。"),
    (503, "サーバーは現在利用できない。"),
    (504, "サーバーはアップストリームから時宜を得た応答を受け取れなかった。"),
    (505, "サーバーはリクエストで使用された HTTP プロトコルバージョンをサポートしていない。"),
    (511, "クライアントはネットワークアクセスを得るために認証が必要である。"),
];

static HTTP_STATUS_JA: LazyLock<StatusMap<StatusRecord>> = LazyLock::new(|| {
    crate::http_status()
        .localize(MESSAGES)
        .expect("Japanese locale covers every canonical status code")
});

/// The status collection with Japanese messages.
///
/// ```
/// use http_reply::locales::ja;
///
/// let forbidden = &ja::http_status()["FORBIDDEN"];
/// assert_eq!(forbidden.code(), 403);
/// assert_eq!(forbidden.message(), "サーバーはリクエストを理解したが、承認を拒否した。");
/// ```
#[must_use]
pub fn http_status() -> &'static StatusMap<StatusRecord> {
    &HTTP_STATUS_JA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_the_canonical_code_set() {
        let base = crate::http_status();
        let ja = http_status();
        assert_eq!(ja.len(), base.len());
        for (code, record) in ja.iter() {
            let original = base.get(code).unwrap();
            assert_eq!(record.code(), original.code());
            assert_eq!(record.name(), original.name());
            assert!(!record.message().is_empty());
        }
    }

    #[test]
    fn forbidden_is_translated() {
        let forbidden = &http_status()["forbidden"];
        assert_eq!(forbidden.message(), "サーバーはリクエストを理解したが、承認を拒否した。");
    }

    #[test]
    fn aliases_stay_identical_after_localization() {
        let ja = http_status();
        assert!(std::ptr::eq(ja.get(200).unwrap(), ja.get("OK").unwrap()));
        assert!(std::ptr::eq(ja.get("OK").unwrap(), ja.get("ok").unwrap()));
    }
}
