use crate::error::ClientError;

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "text-sm text-green-600",
            Notice::Error(_) => "text-sm text-red-500",
        }
    }
}

/// Upload precondition: nothing leaves the browser without a staged file.
pub fn require_file<F>(staged: Option<F>) -> Result<F, ClientError> {
    staged.ok_or(ClientError::NoFileSelected)
}

pub fn upload_notice(result: &Result<(), ClientError>) -> Notice {
    match result {
        Ok(()) => Notice::Success("Upload berhasil".to_string()),
        Err(err) => Notice::Error(err.user_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_staged_file_is_rejected_locally() {
        let err = require_file::<String>(None).unwrap_err();
        assert_eq!(err, ClientError::NoFileSelected);
        assert_eq!(
            Notice::Error(err.user_message()).text(),
            "Pilih file CSV dulu"
        );
    }

    #[test]
    fn staged_file_passes_through() {
        assert_eq!(require_file(Some("statement.csv")).unwrap(), "statement.csv");
    }

    #[test]
    fn notices_follow_upload_result() {
        assert_eq!(
            upload_notice(&Ok(())),
            Notice::Success("Upload berhasil".into())
        );
        let failed = upload_notice(&Err(ClientError::Status {
            status: 500,
            message: None,
        }));
        assert_eq!(failed, Notice::Error("Upload gagal".into()));
        assert_eq!(failed.class(), "text-sm text-red-500");
    }
}
