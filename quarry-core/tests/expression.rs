#[cfg(test)]
mod tests {
    use quarry_core::{
        Column, Comparison, Condition, Constant, Equal, Expression, Field, IntConst, Operator,
        StrConst, ValueConst, columns,
    };
    use serde::Serialize;

    #[test]
    fn field() {
        assert_eq!(Field::new("x").to_string(), "[x]");
        assert_eq!(Field::new("test_field").to_string(), "[test_field]");
        assert_eq!(Field::from_static("a b").to_string(), "[a b]");
        assert_eq!(Field::new(String::from("owned")).name(), "owned");
    }

    #[test]
    fn operators() {
        assert_eq!(Operator::Equal.to_string(), "==");
        assert_eq!(Operator::And.to_string(), "AND");
        assert_eq!(Operator::Or.to_string(), "OR");
    }

    #[test]
    fn equal_to_int() {
        let condition = Field::new("test_field").equal_to(1);
        assert_eq!(condition.operator(), Operator::Equal);
        assert_eq!(condition.to_string(), "[test_field] == 1");
        let Condition::Equal(Equal { comparison }) = &condition else {
            panic!("Expected an equal condition, got {condition:?}");
        };
        assert_eq!(comparison.operator, Operator::Equal);
        assert_eq!(
            comparison.expressions,
            [
                Expression::Field(Field::new("test_field")),
                Expression::Constant(Constant::Int(IntConst::new(1))),
            ]
        );
        assert_eq!(Field::new("x").equal_to_int(-3).to_string(), "[x] == -3");
    }

    #[test]
    fn equal_to_string() {
        let condition = Field::new("email").equal_to("test@example.com");
        assert_eq!(condition.to_string(), "[email] == 'test@example.com'");
        assert_eq!(
            Field::new("name").equal_to_string("O'Neil").to_string(),
            "[name] == 'O''Neil'"
        );
        let Condition::Equal(equal) = condition else {
            panic!("Expected an equal condition");
        };
        assert_eq!(equal.lhs(), Some(&Expression::Field(Field::new("email"))));
        assert_eq!(
            equal.rhs(),
            Some(&Expression::Constant(Constant::Str(StrConst::new("test@example.com"))))
        );
    }

    #[test]
    fn text_operands_are_sql_quoted() {
        assert_eq!(Field::new("x").equal_to("abc").to_string(), "[x] == 'abc'");
        assert_eq!(
            Field::new("x").equal_to(String::from(r#"say "hi""#)).to_string(),
            r#"[x] == 'say "hi"'"#
        );
        assert_eq!(
            Field::new("x").equal_to_any("a\\b\n").to_string(),
            "[x] == 'a\\b\n'"
        );
    }

    #[test]
    fn equal_to_passthrough() {
        let condition = Field::new("a").equal_to_field(&Field::new("b"));
        assert_eq!(condition.to_string(), "[a] == [b]");

        let condition = Field::new("a").equal_to(ValueConst::new(12));
        assert_eq!(condition.to_string(), "[a] == 12");
        let Condition::Equal(equal) = condition else {
            panic!("Expected an equal condition");
        };
        assert_eq!(
            equal.rhs(),
            Some(&Expression::Constant(Constant::Value(ValueConst::new(12))))
        );
    }

    #[test]
    fn equal_to_any() {
        assert_eq!(Field::new("x").equal_to_any(&1).to_string(), "[x] == 1");
        assert_eq!(Field::new("x").equal_to_any("it's").to_string(), "[x] == 'it''s'");
        assert_eq!(Field::new("x").equal_to_any(&5usize).to_string(), "[x] == 5");
        assert_eq!(
            Field::new("x").equal_to_any(&u64::MAX).to_string(),
            "[x] == 18446744073709551615"
        );
        assert_eq!(
            Field::new("x").equal_to_any(&(i64::MAX as u64 + 1)).to_string(),
            "[x] == 9223372036854775808"
        );
        assert_eq!(
            Field::new("x").equal_to_any(&i64::MIN).to_string(),
            "[x] == -9223372036854775808"
        );
        assert_eq!(Field::new("x").equal_to_any(&2.5).to_string(), "[x] == <nil>");
        assert_eq!(Field::new("x").equal_to_any(&true).to_string(), "[x] == <nil>");
        assert_eq!(Field::new("x").equal_to_any(&None::<i32>).to_string(), "[x] == <nil>");

        #[derive(Serialize)]
        struct Point {
            x: i32,
        }
        let condition = Field::new("p").equal_to_any(&Point { x: 1 });
        let Condition::Equal(equal) = &condition else {
            panic!("Expected an equal condition");
        };
        assert_eq!(equal.rhs(), Some(&Expression::absent()));
        assert_eq!(condition.operator(), Operator::Equal);
    }

    #[test]
    fn comparison() {
        let comparison = Comparison::new(
            Operator::Equal,
            [Field::new("a").into(), Expression::from(1), "b".into()],
        );
        assert_eq!(comparison.to_string(), "[a] == 1 == 'b'");
        assert_eq!(comparison.expressions().len(), 3);
        let expression = Expression::from(Comparison::new(
            Operator::Equal,
            [Field::new("x").into(), Expression::from(-1)],
        ));
        assert_eq!(expression.to_string(), "[x] == -1");
    }

    #[test]
    fn groups() {
        let a = Field::new("a").equal_to(1);
        let b = Field::new("b").equal_to("two");
        let c = Field::new("c").equal_to(3);

        let and = a.clone().and(b.clone());
        assert_eq!(and.operator(), Operator::And);
        assert_eq!(and.to_string(), "[a] == 1 AND [b] == 'two'");

        let and = and.and(c.clone());
        assert_eq!(and.to_string(), "[a] == 1 AND [b] == 'two' AND [c] == 3");
        let Condition::And(group) = &and else {
            panic!("Expected an and group");
        };
        assert_eq!(group.conditions.len(), 3);

        let or = Condition::any([a.clone(), b.clone()]);
        assert_eq!(or.operator(), Operator::Or);
        assert_eq!(or.to_string(), "[a] == 1 OR [b] == 'two'");

        let mixed = or.and(c);
        assert_eq!(mixed.to_string(), "([a] == 1 OR [b] == 'two') AND [c] == 3");
        let mixed = mixed.or(Condition::all([a, b]));
        assert_eq!(
            mixed.to_string(),
            "(([a] == 1 OR [b] == 'two') AND [c] == 3) OR ([a] == 1 AND [b] == 'two')"
        );
    }

    #[test]
    fn equal_operands_out_of_range() {
        let equal = Equal {
            comparison: Comparison {
                operator: Operator::Equal,
                expressions: vec![Field::new("a").into()],
            },
        };
        assert_eq!(equal.lhs(), Some(&Expression::Field(Field::new("a"))));
        assert_eq!(equal.rhs(), None);

        let equal = Equal {
            comparison: Comparison {
                operator: Operator::Equal,
                expressions: Vec::new(),
            },
        };
        assert_eq!(equal.lhs(), None);
        assert_eq!(equal.rhs(), None);
    }

    #[test]
    fn empty_groups() {
        assert!(Condition::all([]).is_empty());
        assert!(Condition::any([Condition::all([])]).is_empty());
        assert!(!Field::new("a").equal_to(1).is_empty());
        assert_eq!(Condition::all([]).to_string(), "");

        let a = Field::new("a").equal_to(1);
        let b = Field::new("b").equal_to(2);
        let condition = Condition::all([a.clone(), Condition::any([]), b.clone()]);
        assert_eq!(condition.to_string(), "[a] == 1 AND [b] == 2");
        let condition = Condition::any([Condition::all([]), a]).or(Condition::all([b]));
        assert_eq!(condition.to_string(), "[a] == 1 OR ([b] == 2)");
    }

    #[test]
    fn columns_keep_order() {
        let cols = columns(["c", "a", "b"]);
        assert_eq!(cols.len(), 3);
        for (col, name) in cols.iter().zip(["c", "a", "b"]) {
            assert_eq!(col.expression, Expression::Field(Field::new(name)));
            assert!(col.alias.is_empty());
        }
        assert!(columns(Vec::<String>::new()).is_empty());
        assert_eq!(
            Column::new(Field::new("email")).alias("mail").to_string(),
            "[email] AS mail"
        );
    }
}
