//! Порядковые номера запросов каталога
//!
//! Ответы приходят не в порядке отправки: быстрый ввод в поиске может
//! вернуть старый ответ после нового. Ответ применяется только если его
//! номер новее последнего применённого.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    issued: u64,
    applied: u64,
}

impl RequestSeq {
    /// Выдать номер очередному запросу
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Применить ответ с данным номером. Возвращает `false`,
    /// если ответ устарел и должен быть отброшен.
    pub fn commit(&mut self, ticket: u64) -> bool {
        if ticket > self.applied {
            self.applied = ticket;
            true
        } else {
            false
        }
    }

    /// Локальное изменение состояния: все запросы в полёте считаются
    /// устаревшими, их ответы не будут применены.
    pub fn supersede(&mut self) {
        self.applied = self.issued;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commits_in_order() {
        let mut seq = RequestSeq::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(seq.commit(first));
        assert!(seq.commit(second));
    }

    #[test]
    fn test_discards_stale_response() {
        let mut seq = RequestSeq::default();
        let first = seq.issue();
        let second = seq.issue();
        // Второй запрос вернулся раньше первого
        assert!(seq.commit(second));
        assert!(!seq.commit(first));
    }

    #[test]
    fn test_supersede_invalidates_in_flight() {
        let mut seq = RequestSeq::default();
        let in_flight = seq.issue();
        seq.supersede();
        assert!(!seq.commit(in_flight));
    }

    #[test]
    fn test_issue_after_supersede_commits() {
        let mut seq = RequestSeq::default();
        let stale = seq.issue();
        seq.supersede();
        let fresh = seq.issue();
        assert!(seq.commit(fresh));
        assert!(!seq.commit(stale));
    }
}
