mod self_assign;
