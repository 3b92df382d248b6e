//! 문자열 처리 유틸리티
//!
//! 요청 필드의 "있음/비어 있음/없음"을 구분하는 데 쓰는 함수들입니다.

/// 공백을 제거한 뒤 비어 있지 않은 값만 남깁니다.
///
/// 수정 요청에서 "값이 주어졌고 비어 있지 않은 경우에만 반영"하는 규칙에 사용합니다.
/// 반환값은 원본 문자열이며 트리밍된 결과가 아닙니다.
pub fn clean_optional_string(value: Option<&str>) -> Option<&str> {
    value.filter(|s| is_valid_string(s))
}

/// 공백 제거 후 비어 있지 않은지 확인
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 공백 제거 후 문자 수가 최소 길이 이상인지 확인
pub fn has_min_trimmed_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}
