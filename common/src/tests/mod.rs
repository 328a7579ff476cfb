mod http_status;
mod redacted_secret;
