use clap::Parser;

/// 서비스 실행 옵션 (명령행 인자 또는 환경 변수)
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Auction catalog REST service")]
pub struct Config {
    /// PostgreSQL 접속 URL
    #[arg(long = "database-url", env = "DATABASE_URL")]
    pub database_url: String,

    /// 서버 바인딩 주소
    #[arg(long = "listen-addr", env = "LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    pub listen_addr: String,

    /// 커넥션 풀 최대 크기
    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub db_max_connections: u32,

    /// 인증 연동 전까지 사용하는 판매자 이름
    #[arg(long = "placeholder-seller", env = "PLACEHOLDER_SELLER", default_value = "test")]
    pub placeholder_seller: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "auction-catalog",
            "--database-url",
            "postgres://localhost/auctions",
            "--listen-addr",
            "127.0.0.1:8080",
            "--db-max-connections",
            "10",
            "--placeholder-seller",
            "bob",
        ])
        .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/auctions");
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.placeholder_seller, "bob");
    }
}
