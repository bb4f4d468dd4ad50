use std::fmt;

use crate::model::Record;

/// One entry of the built-in HTTP status code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode {
    pub code: u16,
    pub description: &'static str,
    pub detail: &'static str,
    pub mdn_link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Informational,
        Category::Success,
        Category::Redirection,
        Category::ClientError,
        Category::ServerError,
    ];

    pub fn from_code(code: u16) -> Option<Self> {
        match code / 100 {
            1 => Some(Category::Informational),
            2 => Some(Category::Success),
            3 => Some(Category::Redirection),
            4 => Some(Category::ClientError),
            5 => Some(Category::ServerError),
            _ => None,
        }
    }

    /// Parses a class name such as `4xx` (case-insensitive).
    pub fn parse(class: &str) -> Option<Self> {
        let class = class.to_ascii_lowercase();
        let digit = class.strip_suffix("xx")?;
        match digit {
            "1" => Some(Category::Informational),
            "2" => Some(Category::Success),
            "3" => Some(Category::Redirection),
            "4" => Some(Category::ClientError),
            "5" => Some(Category::ServerError),
            _ => None,
        }
    }

    pub fn class(self) -> u16 {
        match self {
            Category::Informational => 1,
            Category::Success => 2,
            Category::Redirection => 3,
            Category::ClientError => 4,
            Category::ServerError => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Informational => "Informational",
            Category::Success => "Success",
            Category::Redirection => "Redirection",
            Category::ClientError => "Client Error",
            Category::ServerError => "Server Error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl StatusCode {
    pub fn category(&self) -> Option<Category> {
        Category::from_code(self.code)
    }

    pub fn to_record(&self) -> Record {
        let mut record = Record::new(self.code.to_string(), self.description)
            .with_detail(self.detail)
            .with_link(self.mdn_link);
        if let Some(category) = self.category() {
            record = record.with_category(category.name());
        }
        record
    }
}

pub fn lookup(code: u16) -> Option<&'static StatusCode> {
    CODES
        .binary_search_by_key(&code, |entry| entry.code)
        .ok()
        .map(|idx| &CODES[idx])
}

pub fn in_category(category: Category) -> impl Iterator<Item = &'static StatusCode> {
    CODES
        .iter()
        .filter(move |entry| entry.category() == Some(category))
}

/// All codes as picker records, ascending by code.
pub fn records() -> Vec<Record> {
    CODES.iter().map(StatusCode::to_record).collect()
}

// Kept sorted by code; `lookup` relies on it.
pub static CODES: &[StatusCode] = &[
    StatusCode {
        code: 100,
        description: "Continue",
        detail: "The server has received the request headers and the client should proceed to send the request body.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/100",
    },
    StatusCode {
        code: 101,
        description: "Switching Protocols",
        detail: "The requester has asked the server to switch protocols and the server has agreed to do so.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/101",
    },
    StatusCode {
        code: 102,
        description: "Processing",
        detail: "The server has received and is processing the request, but no response is available yet.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/102",
    },
    StatusCode {
        code: 103,
        description: "Early Hints",
        detail: "Used to return some response headers before final HTTP message.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/103",
    },
    StatusCode {
        code: 200,
        description: "OK",
        detail: "The request has succeeded. The information returned with the response depends on the method used in the request.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/200",
    },
    StatusCode {
        code: 201,
        description: "Created",
        detail: "The request has succeeded and a new resource has been created as a result. This is typically the response sent after POST requests, or some PUT requests.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/201",
    },
    StatusCode {
        code: 202,
        description: "Accepted",
        detail: "The request has been received but not yet acted upon. It is noncommittal, since there is no way in HTTP to later send an asynchronous response indicating the outcome of the request.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/202",
    },
    StatusCode {
        code: 203,
        description: "Non-Authoritative Information",
        detail: "The returned metadata is not exactly the same as is available from the origin server, but is collected from a local or a third-party copy.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/203",
    },
    StatusCode {
        code: 204,
        description: "No Content",
        detail: "The server successfully processed the request, but is not returning any content. Usually used as a response to a successful delete request.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/204",
    },
    StatusCode {
        code: 205,
        description: "Reset Content",
        detail: "The server successfully processed the request, asks that the requester reset its document view, and is not returning any content.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/205",
    },
    StatusCode {
        code: 206,
        description: "Partial Content",
        detail: "The server is delivering only part of the resource due to a range header sent by the client. Used for resumable downloads and split downloads.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/206",
    },
    StatusCode {
        code: 207,
        description: "Multi-Status",
        detail: "The message body that follows is by default an XML message and can contain a number of separate response codes, depending on how many sub-requests were made.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/207",
    },
    StatusCode {
        code: 208,
        description: "Already Reported",
        detail: "The members of a DAV binding have already been enumerated in a preceding part of the (multistatus) response, and are not being included again.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/208",
    },
    StatusCode {
        code: 226,
        description: "IM Used",
        detail: "The server has fulfilled a request for the resource, and the response is a representation of the result of one or more instance-manipulations applied to the current instance.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/226",
    },
    StatusCode {
        code: 300,
        description: "Multiple Choices",
        detail: "The request has more than one possible response. The user-agent or user should choose one of them.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/300",
    },
    StatusCode {
        code: 301,
        description: "Moved Permanently",
        detail: "The URL of the requested resource has been changed permanently. The new URL is given in the response.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/301",
    },
    StatusCode {
        code: 302,
        description: "Found",
        detail: "The URI of requested resource has been changed temporarily. Further changes in the URI might be made in the future.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/302",
    },
    StatusCode {
        code: 303,
        description: "See Other",
        detail: "The server sent this response to direct the client to get the requested resource at another URI with a GET request.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/303",
    },
    StatusCode {
        code: 304,
        description: "Not Modified",
        detail: "This is used for caching purposes. It tells the client that the response has not been modified, so the client can continue to use the same cached version of the response.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/304",
    },
    StatusCode {
        code: 305,
        description: "Use Proxy",
        detail: "Defined in a previous version of the HTTP specification to indicate that a requested response must be accessed by a proxy. It has been deprecated due to security concerns regarding in-band configuration of a proxy.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/305",
    },
    StatusCode {
        code: 307,
        description: "Temporary Redirect",
        detail: "The server sends this response to direct the client to get the requested resource at another URI with the same method that was used in the prior request.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/307",
    },
    StatusCode {
        code: 308,
        description: "Permanent Redirect",
        detail: "This means that the resource is now permanently located at another URI, specified by the Location: HTTP Response header.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/308",
    },
    StatusCode {
        code: 400,
        description: "Bad Request",
        detail: "The server cannot or will not process the request due to something that is perceived to be a client error (e.g., malformed request syntax, invalid request message framing, or deceptive request routing).",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/400",
    },
    StatusCode {
        code: 401,
        description: "Unauthorized",
        detail: "Although the HTTP standard specifies 'unauthorized', semantically this response means 'unauthenticated'. That is, the client must authenticate itself to get the requested response.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/401",
    },
    StatusCode {
        code: 402,
        description: "Payment Required",
        detail: "This response code is reserved for future use. The initial aim for creating this code was using it for digital payment systems, however this status code is used very rarely and no standard convention exists.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/402",
    },
    StatusCode {
        code: 403,
        description: "Forbidden",
        detail: "The client does not have access rights to the content; that is, it is unauthorized, so the server is refusing to give the requested resource. Unlike 401, the client's identity is known to the server.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/403",
    },
    StatusCode {
        code: 404,
        description: "Not Found",
        detail: "The server can not find the requested resource. In the browser, this means the URL is not recognized. In an API, this can also mean that the endpoint is valid but the resource itself does not exist.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/404",
    },
    StatusCode {
        code: 405,
        description: "Method Not Allowed",
        detail: "The request method is known by the server but is not supported by the target resource. For example, an API may not allow DELETE a resource.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/405",
    },
    StatusCode {
        code: 406,
        description: "Not Acceptable",
        detail: "This response is sent when the web server, after performing server-driven content negotiation, doesn't find any content that conforms to the criteria given by the user agent.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/406",
    },
    StatusCode {
        code: 407,
        description: "Proxy Authentication Required",
        detail: "This is similar to 401 but authentication is needed to be done by a proxy.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/407",
    },
    StatusCode {
        code: 408,
        description: "Request Timeout",
        detail: "This response is sent on an idle connection by some servers, even without any previous request by the client. It means that the server would like to shut down this unused connection.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/408",
    },
    StatusCode {
        code: 409,
        description: "Conflict",
        detail: "This response is sent when a request conflicts with the current state of the server.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/409",
    },
    StatusCode {
        code: 410,
        description: "Gone",
        detail: "This response is sent when the requested content has been permanently deleted from server, with no forwarding address. Clients are expected to remove their caches and links to the resource.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/410",
    },
    StatusCode {
        code: 411,
        description: "Length Required",
        detail: "Server rejected the request because the Content-Length header field is not defined and the server requires it.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/411",
    },
    StatusCode {
        code: 412,
        description: "Precondition Failed",
        detail: "The client has indicated preconditions in its headers which the server does not meet.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/412",
    },
    StatusCode {
        code: 413,
        description: "Payload Too Large",
        detail: "Request entity is larger than limits defined by server; the server might close the connection or return an Retry-After header field.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/413",
    },
    StatusCode {
        code: 414,
        description: "URI Too Long",
        detail: "The URI requested by the client is longer than the server is willing to interpret.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/414",
    },
    StatusCode {
        code: 415,
        description: "Unsupported Media Type",
        detail: "The media format of the requested data is not supported by the server, so the server is rejecting the request.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/415",
    },
    StatusCode {
        code: 416,
        description: "Range Not Satisfiable",
        detail: "The range specified by the Range header field in the request can't be fulfilled; it's possible that the range is outside the size of the target URI's data.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/416",
    },
    StatusCode {
        code: 417,
        description: "Expectation Failed",
        detail: "This response code means the expectation indicated by the Expect request header field can't be met by the server.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/417",
    },
    StatusCode {
        code: 418,
        description: "I'm a teapot",
        detail: "The server refuses the attempt to brew coffee with a teapot. This code was defined as an April Fools' joke in 1998.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/418",
    },
    StatusCode {
        code: 421,
        description: "Misdirected Request",
        detail: "The request was directed at a server that is not able to produce a response. This can be sent by a server that is not configured to produce responses for the combination of scheme and authority that are included in the request URI.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/421",
    },
    StatusCode {
        code: 422,
        description: "Unprocessable Entity",
        detail: "The request was well-formed but was unable to be followed due to semantic errors. Commonly used with validation errors in APIs.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/422",
    },
    StatusCode {
        code: 423,
        description: "Locked",
        detail: "The resource that is being accessed is locked. Used in WebDAV.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/423",
    },
    StatusCode {
        code: 424,
        description: "Failed Dependency",
        detail: "The request failed due to failure of a previous request. Used in WebDAV.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/424",
    },
    StatusCode {
        code: 425,
        description: "Too Early",
        detail: "Indicates that the server is unwilling to risk processing a request that might be replayed.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/425",
    },
    StatusCode {
        code: 426,
        description: "Upgrade Required",
        detail: "The server refuses to perform the request using the current protocol but might be willing to do so after the client upgrades to a different protocol.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/426",
    },
    StatusCode {
        code: 428,
        description: "Precondition Required",
        detail: "The origin server requires the request to be conditional. This response is intended to prevent the 'lost update' problem, where a client GETs a resource's state, modifies it, and PUTs it back to the server, when meanwhile a third party has modified the state on the server, leading to a conflict.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/428",
    },
    StatusCode {
        code: 429,
        description: "Too Many Requests",
        detail: "The user has sent too many requests in a given amount of time ('rate limiting'). Often used for API rate limiting.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/429",
    },
    StatusCode {
        code: 431,
        description: "Request Header Fields Too Large",
        detail: "The server is unwilling to process the request because its header fields are too large. The request may be resubmitted after reducing the size of the request header fields.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/431",
    },
    StatusCode {
        code: 451,
        description: "Unavailable For Legal Reasons",
        detail: "The user-agent requested a resource that cannot legally be provided, such as a web page censored by a government.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/451",
    },
    StatusCode {
        code: 500,
        description: "Internal Server Error",
        detail: "The server has encountered a situation it doesn't know how to handle. A generic error message, given when an unexpected condition was encountered and no more specific message is suitable.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/500",
    },
    StatusCode {
        code: 501,
        description: "Not Implemented",
        detail: "The request method is not supported by the server and cannot be handled. The only methods that servers are required to support (and therefore that must not return this code) are GET and HEAD.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/501",
    },
    StatusCode {
        code: 502,
        description: "Bad Gateway",
        detail: "This error response means that the server, while working as a gateway to get a response needed to handle the request, got an invalid response.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/502",
    },
    StatusCode {
        code: 503,
        description: "Service Unavailable",
        detail: "The server is not ready to handle the request. Common causes are a server that is down for maintenance or that is overloaded. Note that together with this response, a user-friendly page explaining the problem should be sent.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/503",
    },
    StatusCode {
        code: 504,
        description: "Gateway Timeout",
        detail: "This error response is given when the server is acting as a gateway and cannot get a response in time.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/504",
    },
    StatusCode {
        code: 505,
        description: "HTTP Version Not Supported",
        detail: "The HTTP version used in the request is not supported by the server.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/505",
    },
    StatusCode {
        code: 506,
        description: "Variant Also Negotiates",
        detail: "The server has an internal configuration error: the chosen variant resource is configured to engage in transparent content negotiation itself, and is therefore not a proper end point in the negotiation process.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/506",
    },
    StatusCode {
        code: 507,
        description: "Insufficient Storage",
        detail: "The server is unable to store the representation needed to complete the request. Used in WebDAV.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/507",
    },
    StatusCode {
        code: 508,
        description: "Loop Detected",
        detail: "The server detected an infinite loop while processing the request. Used in WebDAV.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/508",
    },
    StatusCode {
        code: 510,
        description: "Not Extended",
        detail: "Further extensions to the request are required for the server to fulfill it.",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/510",
    },
    StatusCode {
        code: 511,
        description: "Network Authentication Required",
        detail: "The client needs to authenticate to gain network access. Intended for use by intercepting proxies used to control access to the network (e.g., 'captive portals' used to require agreement to Terms of Service before granting full Internet access via a Wi-Fi hotspot).",
        mdn_link: "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/511",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(CODES.windows(2).all(|pair| pair[0].code < pair[1].code));
    }

    #[test]
    fn every_code_has_a_category_and_link() {
        for entry in CODES {
            assert!(entry.category().is_some(), "{} has no category", entry.code);
            assert!(entry.mdn_link.ends_with(&entry.code.to_string()));
            assert!(!entry.description.is_empty());
        }
    }

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(lookup(404).map(|e| e.description), Some("Not Found"));
        assert_eq!(lookup(418).map(|e| e.description), Some("I'm a teapot"));
        assert!(lookup(299).is_none());
        assert!(lookup(999).is_none());
    }

    #[test]
    fn parse_category_classes() {
        assert_eq!(Category::parse("4xx"), Some(Category::ClientError));
        assert_eq!(Category::parse("5XX"), Some(Category::ServerError));
        assert_eq!(Category::parse("6xx"), None);
        assert_eq!(Category::parse("0xx"), None);
        assert_eq!(Category::parse("44x"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn in_category_filters_by_class() {
        let redirects: Vec<u16> = in_category(Category::Redirection).map(|e| e.code).collect();
        assert_eq!(redirects, vec![300, 301, 302, 303, 304, 305, 307, 308]);
    }

    #[test]
    fn records_carry_preview_fields() {
        let records = records();
        assert_eq!(records.len(), CODES.len());
        let not_found = records.iter().find(|r| r.id == "404").unwrap();
        assert_eq!(not_found.label, "Not Found");
        assert_eq!(not_found.category.as_deref(), Some("Client Error"));
        assert!(not_found.link.as_deref().unwrap().ends_with("/404"));
        assert_eq!(not_found.search_key(), "404 Not Found Client Error");
    }
}
