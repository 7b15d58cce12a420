quick_error! {
    #[derive(Debug, PartialEq)]
    pub enum Error {
        /// The bytes could be read but do not form a FITS primary header
        UnreadableFile(message: String) {
            display("Unreadable FITS file: {message}")
        }
        /// The file reference could not be resolved to something readable
        NotFound(reference: String) {
            display("{reference} could not be resolved")
        }
        Utf8 {
            from(std::str::Utf8Error)
            display("Fail to parse a keyword as a utf8 string")
        }
        /// IO error wrapping the std::io::Error
        Io(kind: std::io::ErrorKind) {
            // to be able to derive from PartialEq just above
            // as std::io::Error does not impl PartialEq
            // only its error kind is stored
            display("I/O error: {kind}")
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(err.to_string()),
            kind => Error::Io(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert!(matches!(err, Error::NotFound(_)));

        let err: Error = std::io::Error::from(std::io::ErrorKind::PermissionDenied).into();
        assert_eq!(err, Error::Io(std::io::ErrorKind::PermissionDenied));
    }
}
